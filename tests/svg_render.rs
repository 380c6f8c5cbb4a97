//! Rendering tests — plan symbols and render the SVG preview.

use barlib::{plan_encoded, plan_to_svg, Bar, BarcodePlan, EncodedSymbol, TextChar};
use std::path::PathBuf;

fn output_dir() -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test_output");
    std::fs::create_dir_all(&dir).ok();
    dir
}

fn sample_symbol() -> EncodedSymbol {
    EncodedSymbol {
        runs: "1a1a1a1".to_string(),
        textinfo: "0:10:1 4:10:2 8:10:3".to_string(),
        margin: 10.0,
        width: None,
        height: None,
    }
}

#[test]
fn render_sample_svg() {
    let plan = plan_encoded(&sample_symbol(), true, 2.0).unwrap();
    let svg = plan_to_svg(&plan);

    // Basic SVG structure checks
    assert!(svg.starts_with("<svg"), "Output should be SVG");
    assert!(svg.contains("</svg>"), "SVG should be closed");
    assert!(svg.contains("viewBox="), "SVG should have viewBox");

    // One background rect plus one rect per bar
    assert_eq!(svg.matches("<rect").count(), plan.bars.len() + 1);
    assert_eq!(svg.matches("<text").count(), plan.chars.len());

    // Write to file for visual inspection
    let out = output_dir().join("sample.svg");
    std::fs::write(&out, &svg).expect("Failed to write SVG");
    println!("✓ Rendered sample.svg ({} bytes)", svg.len());
    println!("  Output: {}", out.display());
}

#[test]
fn bars_are_drawn_from_their_left_edge() {
    let plan = plan_encoded(&sample_symbol(), true, 1.0).unwrap();
    let svg = plan_to_svg(&plan);

    // The plan stores bar centers; the SVG rect must start half the
    // ink width to the left of it.
    let bar = plan.bars[0];
    let expected = format!(r#"<rect x="{:.2}""#, bar.x - bar.width / 2.0);
    assert!(svg.contains(&expected), "missing {expected} in:\n{svg}");
}

#[test]
fn hidden_text_renders_no_glyphs() {
    let plan = plan_encoded(&sample_symbol(), false, 1.0).unwrap();
    let svg = plan_to_svg(&plan);

    assert_eq!(svg.matches("<text").count(), 0);
    assert_eq!(svg.matches("<rect").count(), plan.bars.len() + 1);
}

#[test]
fn glyphs_are_xml_escaped() {
    let plan = BarcodePlan {
        bars: vec![Bar {
            x: 5.0,
            y: 0.0,
            width: 1.0,
            height: 10.0,
        }],
        chars: vec![TextChar {
            x: 2.0,
            y: 12.0,
            font_size: 9.5,
            ch: '&',
        }],
        width: 20.0,
        height: 15.0,
    };
    let svg = plan_to_svg(&plan);

    assert!(svg.contains("&amp;"), "ampersand should be escaped:\n{svg}");
    assert!(!svg.contains(">&<"));
}

use std::io;

use font_swap::bridge;
use font_swap::host::{FontName, InMemoryHost};

/// A small document to point a panel at: one frame with a nested group,
/// one loose text, and a few installed font families.
fn sample_host() -> InMemoryHost {
    let mut host = InMemoryHost::new("Page 1");

    for (family, style) in [
        ("Inter", "Regular"),
        ("Inter", "Bold"),
        ("Roboto", "Regular"),
        ("Roboto", "Medium"),
        ("Lato", "Light"),
    ] {
        host.install_font(family, style);
    }

    let page = host.page();
    let hero = host.add_frame(&page, "Hero");
    host.add_text(&hero, "Build faster", FontName::new("Inter", "Bold"));
    let nav = host.add_group(&hero, "Nav");
    host.add_text(&nav, "Pricing", FontName::new("Roboto", "Regular"));
    host.add_text(&page, "Footnote", FontName::new("Lato", "Light"));

    host.set_selection(&[hero]);
    host
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        eprintln!("font-swap: serves the font replacement panel protocol on stdio");
        eprintln!("usage: font-swap");
        eprintln!("Frames are \"Content-Length: {{len}}\\r\\n\\r\\n{{json}}\"; see bridge.");
        return Ok(());
    }

    eprintln!("font-swap bridge starting (framed JSON on stdio)...");
    bridge::run_stdio(sample_host())?;
    eprintln!("font-swap bridge exiting");
    Ok(())
}

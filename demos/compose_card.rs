//! Compose both card layouts and print them - demonstrates the library API

use og_compose::{Composer, ComposerConfig, FontSet, LayoutMode, ParsedRequest, Theme};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("og-compose - Card Composition Example\n");

    let config = ComposerConfig::default();
    // Fall back to stub fonts when the bundled assets are not checked out
    let composer = match Composer::new(config.clone()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{} - using stub fonts", e);
            Composer::with_fonts(config, FontSet::from_bytes(b"", b"", b""))?
        }
    };

    let requests = vec![
        ParsedRequest {
            text: "**Hello** from *og-compose* 👋".to_string(),
            md: true,
            theme: Theme::Dark,
            images: vec![
                "https://assets.vercel.com/image/upload/front/assets/design/vercel-triangle-white.svg"
                    .to_string(),
            ],
            ..Default::default()
        },
        ParsedRequest {
            text: "Background and favicon".to_string(),
            images: vec!["https://picsum.photos/1200/630".to_string()],
            layout_mode: LayoutMode::AbImage,
            ..Default::default()
        },
    ];

    for req in requests {
        println!("Layout: {}", req.layout_mode.as_str());
        println!("{}", "=".repeat(60));
        let doc = composer.compose(&req);
        println!("{}", doc);
        println!("{} bytes\n", doc.len());
    }

    Ok(())
}

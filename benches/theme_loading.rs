//! Benchmarks for theme decoding and catalog discovery
//!
//! Run with: cargo bench theme_loading

use aetherion::theme::loader::{self, ThemeFile};
use aetherion::theme::{preset, OverrideRecord, ThemeCatalog, ThemeId};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

const NESTED: &str = r##"{
    "id": "aetherionBlue",
    "meta": { "name": "Midnight Blue" },
    "background": {
        "color": "#0A1430",
        "gradient": { "startColor": "#1B2A5A", "endColor": "#0E1A3D" }
    },
    "text": {
        "header": { "color": "#E6EEFF", "size": 30, "weight": "heavy" },
        "secondary": { "color": "rgba(180, 195, 230, 0.8)" }
    },
    "icons": { "color": "#4DA3FF" }
}"##;

fn strict_json() -> Vec<u8> {
    let theme = preset(ThemeId::Sepia);
    serde_json::to_vec(&ThemeFile::from_theme(&theme, theme.id.as_str(), "Paper")).unwrap()
}

// ============================================================================
// Loader decode stages
// ============================================================================

#[divan::bench]
fn decode_strict(bencher: divan::Bencher) {
    let json = strict_json();
    bencher.bench(|| loader::decode(divan::black_box(&json), None));
}

#[divan::bench]
fn decode_tolerant_nested(bencher: divan::Bencher) {
    bencher.bench(|| loader::decode(divan::black_box(NESTED.as_bytes()), None));
}

#[divan::bench]
fn decode_garbage(bencher: divan::Bencher) {
    let garbage = vec![0xAB_u8; 4096];
    bencher.bench(|| loader::decode(divan::black_box(&garbage), Some(ThemeId::Dark)));
}

#[divan::bench]
fn override_record_roundtrip(bencher: divan::Bencher) {
    let theme = preset(ThemeId::Emerald);
    bencher.bench(|| {
        let json = OverrideRecord::from_theme(divan::black_box(&theme))
            .to_json()
            .unwrap();
        OverrideRecord::from_json(&json).and_then(OverrideRecord::into_theme)
    });
}

// ============================================================================
// Catalog listing
// ============================================================================

#[divan::bench(args = [10, 100, 500])]
fn list_themes(bencher: divan::Bencher, file_count: usize) {
    let dir = tempfile::tempdir().unwrap();
    let user = dir.path().join("Themes");
    std::fs::create_dir_all(&user).unwrap();
    for i in 0..file_count {
        std::fs::write(user.join(format!("theme-{:04}.json", i)), NESTED).unwrap();
    }
    let catalog = ThemeCatalog::new(None, &user);

    bencher.bench(|| catalog.list_themes());
}

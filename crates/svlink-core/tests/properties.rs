//! Totality, purity and range properties over many generated inputs.

use svlink_core::{parse, PanoramaReference};

/// Small deterministic generator so failures reproduce.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next() as usize) % items.len()]
    }
}

const FRAGMENTS: &[&str] = &[
    "https://www.google.com/maps/",
    "@",
    ",",
    "!",
    "1s",
    "7i",
    "8i",
    "-",
    ".",
    "%3D",
    "%26",
    "pitch%3D",
    "%26panoid%3Dabc%26yaw%3D",
    "pi",
    "ya",
    "fo",
    "y",
    "h",
    "t",
    "a",
    "0",
    "9",
    "45.5",
    "-720.25",
    "361",
    "1000000",
    "99999999999999999999999",
    "/data=",
    "?entry=ttu",
    "ż",
    "٣",
    " ",
    "\n",
];

fn generated(seed: u64, count: usize) -> Vec<String> {
    let mut rng = Lcg(seed);
    (0..count)
        .map(|_| {
            let len = (rng.next() % 24) as usize;
            (0..len).map(|_| rng.pick(FRAGMENTS)).collect()
        })
        .collect()
}

fn corpus() -> Vec<String> {
    let mut inputs = generated(0x5eed, 4000);
    inputs.extend(
        [
            "",
            "not a url at all",
            "https://example.com/",
            "@",
            "!1s",
            "!1s!",
            "@1,2!1sX",
            "@1,2,3a,-720.5h,-400t!1sX",
            "@1,2,3a,0.000001y!1sX",
            "@1,2/x-pi-9999-ya-0.0000000000000000001!1sX",
            "@1,2/x-ya359.9999999999999999!1sX",
        ]
        .iter()
        .map(|s| s.to_string()),
    );
    inputs
}

fn check_invariants(p: &PanoramaReference) {
    assert!(!p.id.is_empty());
    assert!(
        (0.0..360.0).contains(&p.heading),
        "heading {} out of range",
        p.heading
    );
    assert!((-90.0..=90.0).contains(&p.pitch), "pitch {} out of range", p.pitch);
    assert!((-90.0..=90.0).contains(&p.latitude));
    assert!((-180.0..=180.0).contains(&p.longitude));
    assert_eq!(p.field_of_view.is_some(), p.zoom_level.is_some());
    if let Some(fov) = p.field_of_view {
        assert!(fov > 0.0 && fov <= 180.0);
    }
    if let Some(zoom) = p.zoom_level {
        assert!((0.0..=1.0).contains(&zoom), "zoom {zoom} out of range");
    }
    assert_ne!(p.image_width, Some(0));
    assert_ne!(p.image_height, Some(0));
}

#[test]
fn every_input_yields_none_or_valid_record() {
    let mut decoded = 0;
    for input in corpus() {
        if let Some(p) = parse(&input) {
            check_invariants(&p);
            decoded += 1;
        }
    }
    assert!(decoded > 0, "corpus should contain decodable links");
}

#[test]
fn parsing_is_pure() {
    for input in corpus() {
        assert_eq!(parse(&input), parse(&input), "input: {input:?}");
    }
}

#[test]
fn parsing_from_many_threads() {
    let inputs = corpus();
    let expected: Vec<_> = inputs.iter().map(|s| parse(s)).collect();
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for (input, want) in inputs.iter().zip(&expected) {
                    assert_eq!(&parse(input), want);
                }
            });
        }
    });
}

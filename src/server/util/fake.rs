//! Fake data generators used by the seeder.
//!
//! Every generator draws from the caller's RNG so a seeded generator yields the same
//! sequence of values on every run.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

const FIRST_NAMES: &[&str] = &[
    "Aaliyah", "Adrian", "Alice", "Amara", "Bruno", "Camila", "Carlos", "Chloe", "Dante", "Diana",
    "Elena", "Elias", "Emma", "Felix", "Freya", "Gabriel", "Grace", "Hana", "Hugo", "Ines",
    "Isaac", "Jade", "Jonas", "Julia", "Kai", "Kira", "Leo", "Lena", "Liam", "Maya", "Milo",
    "Nadia", "Noah", "Olivia", "Oscar", "Priya", "Quinn", "Rosa", "Ruben", "Sara", "Theo",
    "Uma", "Victor", "Willa", "Xavier", "Yara", "Zane", "Zoe",
];

const LAST_NAMES: &[&str] = &[
    "Abbott", "Bauer", "Castillo", "Dalton", "Eriksen", "Fischer", "Garcia", "Hartmann",
    "Ivanov", "Jensen", "Kowalski", "Larsen", "Moreau", "Nakamura", "Okafor", "Petrov",
    "Quintero", "Rossi", "Schmidt", "Tanaka", "Ueda", "Varga", "Walsh", "Xu", "Yilmaz",
    "Zimmerman", "Bennett", "Costa", "Dubois", "Herrera", "Kim", "Novak", "Silva", "Weber",
];

const HACKER_ABBREVIATIONS: &[&str] = &[
    "ADP", "AGP", "AI", "API", "CSS", "EXE", "FTP", "GB", "HDD", "HTTP", "IB", "JBOD", "JSON",
    "OCR", "PCI", "RAM", "SAS", "SCSI", "SDD", "SMS", "SMTP", "SQL", "SSL", "TCP", "THX", "TLS",
    "USB", "XML", "XSS",
];

const HACKER_ADJECTIVES: &[&str] = &[
    "auxiliary", "primary", "back-end", "digital", "open-source", "virtual", "cross-platform",
    "redundant", "online", "haptic", "multi-byte", "bluetooth", "wireless", "1080p", "neural",
    "optical", "solid state", "mobile",
];

const HACKER_NOUNS: &[&str] = &[
    "driver", "protocol", "bandwidth", "panel", "microchip", "program", "port", "card",
    "array", "interface", "system", "sensor", "firewall", "hard drive", "pixel", "alarm",
    "feed", "monitor", "application", "transmitter", "bus", "circuit", "capacitor", "matrix",
];

const HACKER_VERBS: &[&str] = &[
    "back up", "bypass", "hack", "override", "compress", "copy", "navigate", "index",
    "connect", "generate", "quantify", "calculate", "synthesize", "input", "transmit",
    "program", "reboot", "parse",
];

const HACKER_ING_VERBS: &[&str] = &[
    "backing up", "bypassing", "hacking", "overriding", "compressing", "copying",
    "navigating", "indexing", "connecting", "generating", "quantifying", "calculating",
    "synthesizing", "transmitting", "programming", "parsing",
];

const HACKER_PHRASES: &[&str] = &[
    "If we {verb} the {noun}, we can get to the {abbreviation} {noun} through the {adjective} {abbreviation} {noun}!",
    "We need to {verb} the {adjective} {abbreviation} {noun}!",
    "Try to {verb} the {abbreviation} {noun}, maybe it will {verb} the {adjective} {noun}!",
    "You can't {verb} the {noun} without {ingverb} the {adjective} {abbreviation} {noun}!",
    "Use the {adjective} {abbreviation} {noun}, then you can {verb} the {adjective} {noun}!",
    "The {abbreviation} {noun} is down, {verb} the {adjective} {noun} so we can {verb} the {abbreviation} {noun}!",
    "{ingverb} the {noun} won't do anything, we need to {verb} the {adjective} {abbreviation} {noun}!",
    "I'll {verb} the {adjective} {abbreviation} {noun}, that should {noun} the {abbreviation} {noun}!",
];

const LOREM_WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua",
    "enim", "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris",
    "nisi", "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in",
    "reprehenderit", "voluptate", "velit", "esse", "cillum", "fugiat", "nulla", "pariatur",
];

fn pick<'w, R: Rng>(rng: &mut R, words: &[&'w str]) -> &'w str {
    words[rng.random_range(0..words.len())]
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercase internet-style handle such as `lena.moreau` or `kai_tanaka` or `jade482`.
pub fn username<R: Rng>(rng: &mut R) -> String {
    let first = pick(rng, FIRST_NAMES);
    let last = pick(rng, LAST_NAMES);

    let handle = match rng.random_range(0..4) {
        0 => format!("{}.{}", first, last),
        1 => format!("{}_{}", first, last),
        2 => format!("{}{}{}", first, last, rng.random_range(1..100)),
        _ => format!("{}{}", first, rng.random_range(1..1000)),
    };

    handle.to_lowercase()
}

/// Technobabble sentence used for task titles.
pub fn hacker_phrase<R: Rng>(rng: &mut R) -> String {
    let template = pick(rng, HACKER_PHRASES);

    let mut phrase = String::with_capacity(template.len() * 2);
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        phrase.push_str(&rest[..start]);
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        let word = match &rest[start + 1..start + len] {
            "abbreviation" => pick(rng, HACKER_ABBREVIATIONS),
            "adjective" => pick(rng, HACKER_ADJECTIVES),
            "noun" => pick(rng, HACKER_NOUNS),
            "verb" => pick(rng, HACKER_VERBS),
            "ingverb" => pick(rng, HACKER_ING_VERBS),
            other => other,
        };
        phrase.push_str(word);
        rest = &rest[start + len + 1..];
    }
    phrase.push_str(rest);

    capitalize(&phrase)
}

/// Lorem ipsum sentence of three to ten words, capitalized and ending in a period.
pub fn lorem_sentence<R: Rng>(rng: &mut R) -> String {
    let count = rng.random_range(3..=10);
    let words: Vec<&str> = (0..count).map(|_| pick(rng, LOREM_WORDS)).collect();

    format!("{}.", capitalize(&words.join(" ")))
}

/// Instant within the last `days` days before `now`.
pub fn recent<R: Rng>(rng: &mut R, now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    now - Duration::seconds(rng.random_range(0..=days * 86_400))
}

/// Instant within the last `years` years before `now`, never `now` itself.
pub fn past<R: Rng>(rng: &mut R, now: DateTime<Utc>, years: i64) -> DateTime<Utc> {
    now - Duration::seconds(rng.random_range(1..=years * 365 * 86_400))
}

/// Band-spec and item-list parsing.
///
/// Band specs are a comma list of `bound:score` pairs. Bounds are lenient:
/// `0.25`, `25` and `25%` all mean the twenty-fifth percentile. Scores are
/// plain numbers. Structural validation (ascending, ending at 1.0) is the
/// engine's job; this module only turns text into bands.
use serde::Deserialize;
use tierlist_core::{Item, ThresholdBand};

/// The documented default tiers: top 1% -> 10, to 10% -> 9.5, to 25% -> 8.75,
/// to 75% -> 7.5, remainder -> 6. Configuration, not engine logic.
pub fn default_bands() -> Vec<ThresholdBand> {
    vec![
        ThresholdBand { upper_bound: 0.01, score: 10.0 },
        ThresholdBand { upper_bound: 0.10, score: 9.5 },
        ThresholdBand { upper_bound: 0.25, score: 8.75 },
        ThresholdBand { upper_bound: 0.75, score: 7.5 },
        ThresholdBand { upper_bound: 1.00, score: 6.0 },
    ]
}

/// Parse a percentile bound: a fraction in (0, 1], a bare percentage above 1,
/// or an explicit `%` form.
fn parse_bound(text: &str) -> Result<f64, String> {
    let trimmed = text.trim();
    let (digits, is_percent) = match trimmed.strip_suffix('%') {
        Some(rest) => (rest.trim(), true),
        None => (trimmed, false),
    };
    let value: f64 = digits
        .parse()
        .map_err(|_| format!("invalid percentile bound \"{trimmed}\""))?;
    if is_percent || value > 1.0 {
        Ok(value / 100.0)
    } else {
        Ok(value)
    }
}

/// Parse a band spec like "1%:10, 10%:9.5, 25%:8.75, 75%:7.5, 100%:6".
///
/// Output is sorted ascending by bound; the engine validates the rest.
pub fn parse_bands(spec: &str) -> Result<Vec<ThresholdBand>, String> {
    let mut bands = Vec::new();
    for part in spec.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let (bound_text, score_text) = part
            .split_once(':')
            .ok_or_else(|| format!("expected bound:score, got \"{part}\""))?;
        let upper_bound = parse_bound(bound_text)?;
        let score: f64 = score_text
            .trim()
            .parse()
            .map_err(|_| format!("invalid score \"{}\"", score_text.trim()))?;
        bands.push(ThresholdBand { upper_bound, score });
    }
    if bands.is_empty() {
        return Err("band spec contains no bands".to_string());
    }
    bands.sort_by(|a, b| a.upper_bound.total_cmp(&b.upper_bound));
    Ok(bands)
}

/// One album entry in a JSON items file. Bare strings are also accepted and
/// become name-only items.
#[derive(Deserialize)]
#[serde(untagged)]
enum ItemEntry {
    Name(String),
    Album {
        name: String,
        #[serde(default)]
        artist: String,
        #[serde(default)]
        tracks: Vec<String>,
        #[serde(default)]
        url: Option<String>,
    },
}

impl From<ItemEntry> for Item {
    fn from(entry: ItemEntry) -> Item {
        match entry {
            ItemEntry::Name(name) => Item::new(name, ""),
            ItemEntry::Album { name, artist, tracks, url } => Item {
                name,
                artist,
                tracks,
                url,
            },
        }
    }
}

/// Parse item-list content: a JSON array (of album objects or bare strings)
/// or plain text, one album per line.
pub fn parse_items(content: &str) -> Result<Vec<Item>, String> {
    let trimmed = content.trim();
    if trimmed.starts_with('[') {
        let entries: Vec<ItemEntry> = serde_json::from_str(trimmed)
            .map_err(|e| format!("file looks like JSON but failed to parse: {e}"))?;
        Ok(entries
            .into_iter()
            .map(Item::from)
            .filter(|item| !item.name.trim().is_empty())
            .collect())
    } else {
        Ok(trimmed
            .lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .map(|line| Item::new(line, ""))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bound_forms() {
        assert_eq!(parse_bound("0.25").unwrap(), 0.25);
        assert_eq!(parse_bound("25").unwrap(), 0.25);
        assert_eq!(parse_bound("25%").unwrap(), 0.25);
        assert_eq!(parse_bound(" 100% ").unwrap(), 1.0);
        assert_eq!(parse_bound("1").unwrap(), 1.0);
        assert!(parse_bound("abc").is_err());
    }

    #[test]
    fn test_parse_bands_sorted_ascending() {
        let bands = parse_bands("100%:6, 1%:10, 25%:8.75").unwrap();
        let bounds: Vec<f64> = bands.iter().map(|b| b.upper_bound).collect();
        assert_eq!(bounds, vec![0.01, 0.25, 1.0]);
        assert_eq!(bands[0].score, 10.0);
    }

    #[test]
    fn test_parse_bands_rejects_garbage() {
        assert!(parse_bands("").is_err());
        assert!(parse_bands("10").is_err());
        assert!(parse_bands("x:y").is_err());
    }

    #[test]
    fn test_default_bands_valid() {
        tierlist_core::validate_bands(&default_bands()).unwrap();
    }

    #[test]
    fn test_parse_items_plain_text() {
        let items = parse_items("OK Computer\n\n  In Rainbows  \n").unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "OK Computer");
        assert_eq!(items[1].name, "In Rainbows");
    }

    #[test]
    fn test_parse_items_json_objects() {
        let content = r#"[
            { "name": "Blue", "artist": "Joni Mitchell", "tracks": ["All I Want", "River"] },
            { "name": "Hounds of Love", "artist": "Kate Bush", "url": "https://example.com/hol" },
            "Bare Name Album"
        ]"#;
        let items = parse_items(content).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].artist, "Joni Mitchell");
        assert_eq!(items[0].tracks.len(), 2);
        assert_eq!(items[1].url.as_deref(), Some("https://example.com/hol"));
        assert_eq!(items[2].name, "Bare Name Album");
        assert_eq!(items[2].artist, "");
    }

    #[test]
    fn test_parse_items_bad_json() {
        assert!(parse_items("[ not json").is_err());
    }
}

/// CSV result sink and re-score input.
///
/// Columns: rank, score, album, artist, tracks, album_url. That is enough to
/// rebuild the ranked items for a later `rescore` run; track titles are not
/// persisted, only the count (re-scoring never displays them). Permutation
/// validation of the imported ranks belongs to the engine
/// (`Ranking::from_ranked`), not here.
use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tierlist_core::{Item, ScoredResult};

#[derive(Serialize, Deserialize)]
struct CsvRow {
    rank: usize,
    score: f64,
    album: String,
    artist: String,
    tracks: usize,
    album_url: String,
}

pub fn write_results<W: Write>(writer: W, results: &[ScoredResult]) -> Result<(), String> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for result in results {
        csv_writer
            .serialize(CsvRow {
                rank: result.rank,
                score: result.score,
                album: result.item.name.clone(),
                artist: result.item.artist.clone(),
                tracks: result.item.tracks.len(),
                album_url: result.item.url.clone().unwrap_or_default(),
            })
            .map_err(|e| format!("failed to write CSV row: {e}"))?;
    }
    csv_writer
        .flush()
        .map_err(|e| format!("failed to flush CSV: {e}"))
}

pub fn export_csv(path: &Path, results: &[ScoredResult]) -> Result<(), String> {
    let file = std::fs::File::create(path)
        .map_err(|e| format!("failed to create {}: {e}", path.display()))?;
    write_results(file, results)
}

/// Read a previously exported CSV back into `(rank, item)` pairs.
pub fn read_ranking<R: Read>(reader: R) -> Result<Vec<(usize, Item)>, String> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut entries = Vec::new();
    for row in csv_reader.deserialize() {
        let row: CsvRow = row.map_err(|e| format!("malformed CSV row: {e}"))?;
        let item = Item {
            name: row.album,
            artist: row.artist,
            tracks: Vec::new(),
            url: if row.album_url.is_empty() {
                None
            } else {
                Some(row.album_url)
            },
        };
        entries.push((row.rank, item));
    }
    Ok(entries)
}

pub fn load_ranking(path: &Path) -> Result<Vec<(usize, Item)>, String> {
    let file = std::fs::File::open(path)
        .map_err(|e| format!("failed to open {}: {e}", path.display()))?;
    read_ranking(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(rank: usize, name: &str, score: f64) -> ScoredResult {
        let mut item = Item::new(name, "Artist");
        item.tracks = vec!["T1".to_string(), "T2".to_string()];
        item.url = Some(format!("https://example.com/{rank}"));
        ScoredResult { item, rank, score }
    }

    #[test]
    fn test_roundtrip_preserves_rank_order_and_identity() {
        let results = vec![
            scored(1, "Best Album", 10.0),
            scored(2, "Fine Album", 7.5),
            scored(3, "Last Album", 6.0),
        ];
        let mut buffer = Vec::new();
        write_results(&mut buffer, &results).unwrap();

        let entries = read_ranking(buffer.as_slice()).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].0, 1);
        assert_eq!(entries[0].1.name, "Best Album");
        assert_eq!(entries[2].1.url.as_deref(), Some("https://example.com/3"));
        // Track titles are not persisted
        assert!(entries[0].1.tracks.is_empty());
    }

    #[test]
    fn test_header_written_once() {
        let mut buffer = Vec::new();
        write_results(&mut buffer, &[scored(1, "Only", 8.0)]).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("rank,score,album,artist,tracks,album_url"));
        assert_eq!(text.matches("rank,score").count(), 1);
    }

    #[test]
    fn test_malformed_row_errors() {
        let bad = "rank,score,album,artist,tracks,album_url\nnot-a-number,8.0,X,Y,0,\n";
        let err = read_ranking(bad.as_bytes()).unwrap_err();
        assert!(err.contains("malformed"));
    }

    #[test]
    fn test_missing_column_errors() {
        let bad = "rank,album\n1,X\n";
        assert!(read_ranking(bad.as_bytes()).is_err());
    }
}

/// Output formatting: terminal table and JSON.
use serde::Serialize;
use tierlist_core::ScoredResult;

#[derive(Serialize)]
struct JsonScoredItem {
    rank: usize,
    album: String,
    artist: String,
    score: f64,
    tracks: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
}

#[derive(Serialize)]
struct JsonOutput {
    items: Vec<JsonScoredItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    comparisons: Option<usize>,
}

/// Print results as a formatted terminal table.
///
/// `comparisons` is shown in the summary line for fresh sessions; rescore
/// passes None.
pub fn print_table(results: &[ScoredResult], comparisons: Option<usize>) {
    let album_width = results.iter()
        .map(|r| r.item.name.len())
        .max()
        .unwrap_or(5)
        .max(5); // at least "Album"
    let artist_width = results.iter()
        .map(|r| r.item.artist.len())
        .max()
        .unwrap_or(6)
        .max(6);

    println!(" # | {:<album_width$} | {:<artist_width$} | Score | Tracks", "Album", "Artist");
    println!("---|-{}-|-{}-|-------|-------", "-".repeat(album_width), "-".repeat(artist_width));

    for r in results {
        println!(
            "{:>2} | {:<album_width$} | {:<artist_width$} | {:>5} | {:>6}",
            r.rank, r.item.name, r.item.artist, r.score, r.item.tracks.len(),
        );
    }

    match comparisons {
        Some(count) => println!("\n{} albums ranked ({} comparisons)", results.len(), count),
        None => println!("\n{} albums rescored", results.len()),
    }
}

/// Print results as JSON.
pub fn print_json(results: &[ScoredResult], comparisons: Option<usize>) {
    let items: Vec<JsonScoredItem> = results
        .iter()
        .map(|r| JsonScoredItem {
            rank: r.rank,
            album: r.item.name.clone(),
            artist: r.item.artist.clone(),
            score: r.score,
            tracks: r.item.tracks.len(),
            url: r.item.url.clone(),
        })
        .collect();

    let output = JsonOutput {
        items,
        comparisons,
    };

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

use std::path::Path;

use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::load_pattern,
    output::{print_output, Align, TabWriter},
};

#[derive(Debug, Serialize)]
pub struct PatternInfo {
    pub version: String,
    pub tempo: f32,
    pub track_count: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tracks: Vec<TrackInfo>,
}

#[derive(Debug, Serialize)]
pub struct TrackInfo {
    pub id: u8,
    pub name: String,
    pub hits: usize,
}

pub fn run(path: &Path, opts: &GlobalOptions) -> anyhow::Result<()> {
    let pattern = load_pattern(path)?;

    let tracks: Vec<TrackInfo> = pattern
        .tracks
        .iter()
        .map(|track| TrackInfo {
            id: track.id,
            name: track.name.clone(),
            hits: track.steps.iter().filter(|cell| **cell != 0).count(),
        })
        .collect();

    let info = PatternInfo {
        version: pattern.version.clone(),
        tempo: pattern.tempo,
        track_count: pattern.tracks.len(),
        tracks,
    };

    print_output(&info, opts, |info| {
        println!("Version:  {}", info.version);
        println!("Tempo:    {}", info.tempo);
        println!("Tracks:   {}", info.track_count);

        if !info.tracks.is_empty() {
            println!();
            let mut table = TabWriter::new(&[
                ("ID", Align::Right),
                ("NAME", Align::Left),
                ("HITS", Align::Right),
            ])
            .indent("  ");
            for track in &info.tracks {
                table.row(vec![
                    track.id.to_string(),
                    track.name.clone(),
                    track.hits.to_string(),
                ]);
            }
            table.print();
        }
    })
}

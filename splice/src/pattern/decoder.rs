//! The SPLICE binary decoder.
//!
//! A pattern file is laid out as: the null-terminated magic text `"SPLICE"`
//! followed by zero padding, one stored-but-uninterpreted length byte, a
//! null-terminated version string, a little-endian `f32` tempo at the fixed
//! absolute offset [`TEMPO_OFFSET`], and then track records until the data
//! runs out or a record's id field exceeds [`MAX_TRACK_ID`]. The record count
//! is not stored anywhere; the oversized id doubles as the end-of-tracks
//! sentinel.
//!
//! Decoding is deliberately permissive to stay compatible with files the
//! hardware itself accepts: apart from the magic check, every malformed or
//! truncated field degrades into a default value or loop termination instead
//! of an error. Two different damaged files can therefore decode into two
//! different partial patterns without any failure being reported.

use crate::{
    pattern::{Pattern, Track, STEP_COUNT},
    Error, Parser, Result,
};

/// The magic text identifying a valid SPLICE pattern file.
pub const SPLICE_MAGIC: &str = "SPLICE";

/// Absolute byte offset of the tempo field.
///
/// This is a fixed constant of the format, not a value computed from the
/// fields before it: real files carry an 8-byte payload length at bytes 6..14
/// and a null-padded 32-byte version field at 14..46, which places the tempo
/// at 46 regardless of how long the version text is.
pub const TEMPO_OFFSET: usize = 46;

/// Largest value the 4-byte id field may hold for a real track record.
///
/// Anything above this is the end-of-tracks sentinel: the loop stops without
/// adding a track.
pub const MAX_TRACK_ID: u32 = 255;

/// Outcome of reading the 4-byte field that starts a track record.
enum TrackHeader {
    /// A real track follows; the id fits the accepted 0–255 range.
    ValidId(u8),
    /// The field held a value above [`MAX_TRACK_ID`]; no more track records.
    EndOfTracks,
    /// Fewer than 4 bytes remained; the data is exhausted.
    Truncated,
}

fn read_track_header(parser: &mut Parser) -> TrackHeader {
    match parser.read_le::<u32>() {
        Ok(id) if id > MAX_TRACK_ID => TrackHeader::EndOfTracks,
        Ok(id) => TrackHeader::ValidId(id as u8),
        Err(_) => TrackHeader::Truncated,
    }
}

/// Decode a pattern from an already-bounded byte buffer.
///
/// `source` names the input in the one hard error this can produce; callers
/// pass the file path or `<memory>`.
///
/// # Errors
/// Returns [`Error::HeaderMismatch`] if the buffer does not begin with a
/// null-terminated `"SPLICE"`. All other anomalies decode into partial data.
pub(crate) fn decode(data: &[u8], source: &str) -> Result<Pattern> {
    let mut parser = Parser::new(data);

    if parser.read_string_utf8() != SPLICE_MAGIC {
        return Err(Error::HeaderMismatch {
            path: source.to_string(),
        });
    }
    let _ = parser.skip_zero_run();

    // One length byte the format stores but the decoder never interprets.
    let _ = parser.read_byte();
    let version = parser.read_string_utf8();

    parser.seek(TEMPO_OFFSET);
    let tempo = match parser.read_le::<f32>() {
        Ok(tempo) => tempo,
        Err(error) => {
            log::warn!("{source}: tempo read at offset {TEMPO_OFFSET} failed: {error}");
            0.0
        }
    };

    let mut tracks = Vec::new();
    loop {
        let id = match read_track_header(&mut parser) {
            TrackHeader::ValidId(id) => id,
            TrackHeader::EndOfTracks | TrackHeader::Truncated => break,
        };

        let name_length = parser.read_byte().unwrap_or(0);
        let name = parser.read_fixed_string(name_length as usize);

        let mut steps = [0u8; STEP_COUNT];
        let available = parser.read_up_to(STEP_COUNT);
        steps[..available.len()].copy_from_slice(available);

        tracks.push(Track { id, name, steps });
    }

    Ok(Pattern {
        version,
        tempo,
        tracks,
    })
}

//! Utterance duration replication of the VOICEVOX decoder pipeline.
//!
//! The transform order below is load-bearing: it mirrors the engine's
//! query-to-feature processing, and reordering changes the rounded frame
//! counts and therefore the total.

use crate::config::SilenceDefaults;
use crate::vvproj::structs::{AccentPhrase, AudioQuery, Mora};

/// Decoder frame rate: 24000 Hz sampling / 256-sample frame hop.
pub const FRAME_RATE: f64 = 93.75;

/// Seconds to integer frames. Ties round to even, matching the engine's
/// numpy-based rounding; half-away-from-zero drifts the total by up to half
/// a frame per mora.
pub fn to_frame(sec: f64) -> i64 {
    (sec * FRAME_RATE).round_ties_even() as i64
}

/// Flatten accent phrases into one mora sequence, each phrase's trailing
/// pause mora kept immediately after its phonemes.
fn flatten_phrases(phrases: &[AccentPhrase]) -> Vec<Mora> {
    let mut moras = Vec::new();
    for phrase in phrases {
        moras.extend(phrase.moras.iter().cloned());
        if let Some(pause) = &phrase.pause_mora {
            moras.push(pause.clone());
        }
    }
    moras
}

fn apply_prepost_silence(moras: &mut Vec<Mora>, pre_length: f64, post_length: f64) {
    moras.insert(0, Mora::silence(pre_length));
    moras.push(Mora::silence(post_length));
}

/// Explicit pause length overrides every pause mora's engine-assigned length.
fn apply_pause_length(moras: &mut [Mora], query: &AudioQuery) {
    if let Some(pause_length) = query.pause_length {
        for mora in moras.iter_mut().filter(|m| m.is_pause()) {
            mora.vowel_length = pause_length;
        }
    }
}

fn apply_pause_length_scale(moras: &mut [Mora], query: &AudioQuery) {
    for mora in moras.iter_mut().filter(|m| m.is_pause()) {
        mora.vowel_length *= query.pause_length_scale;
    }
}

fn apply_speed_scale(moras: &mut [Mora], query: &AudioQuery) {
    for mora in moras.iter_mut() {
        mora.vowel_length /= query.speed_scale;
        if let Some(length) = mora.consonant_length {
            mora.consonant_length = Some(length / query.speed_scale);
        }
    }
}

fn apply_pitch_scale(moras: &mut [Mora], query: &AudioQuery) {
    for mora in moras.iter_mut() {
        mora.pitch *= 2f64.powf(query.pitch_scale);
    }
}

/// Rescale voiced morae (pitch > 0) around their mean pitch. An empty voiced
/// set or a NaN mean leaves every pitch untouched.
fn apply_intonation_scale(moras: &mut [Mora], query: &AudioQuery) {
    let voiced: Vec<usize> = moras
        .iter()
        .enumerate()
        .filter(|(_, m)| m.pitch > 0.0)
        .map(|(i, _)| i)
        .collect();
    if voiced.is_empty() {
        return;
    }

    let mean = voiced.iter().map(|&i| moras[i].pitch).sum::<f64>() / voiced.len() as f64;
    if mean.is_nan() {
        return;
    }

    for &i in &voiced {
        moras[i].pitch = (moras[i].pitch - mean) * query.intonation_scale + mean;
    }
}

/// Total frames over a processed mora sequence: vowel frames plus consonant
/// frames, each rounded independently.
fn count_frames(moras: &[Mora]) -> i64 {
    moras
        .iter()
        .map(|mora| {
            let vowel_frames = to_frame(mora.vowel_length);
            let consonant_frames = mora.consonant_length.map(to_frame).unwrap_or(0);
            vowel_frames + consonant_frames
        })
        .sum()
}

/// Wall-clock duration of one utterance in seconds.
///
/// Works on a scratch copy of the morae; the parsed query is never mutated.
/// The pitch steps do not change the frame total but stay in place so the
/// pipeline is the engine's, step for step.
pub fn calculate_duration(query: &AudioQuery, silence: &SilenceDefaults) -> f64 {
    let (pre_length, post_length) = query.silence_lengths(silence);

    let mut moras = flatten_phrases(&query.accent_phrases);
    apply_prepost_silence(&mut moras, pre_length, post_length);
    apply_pause_length(&mut moras, query);
    apply_pause_length_scale(&mut moras, query);
    apply_speed_scale(&mut moras, query);
    apply_pitch_scale(&mut moras, query);
    apply_intonation_scale(&mut moras, query);

    count_frames(&moras) as f64 / FRAME_RATE
}

//! Segment-level passes that run around the longest-match composer.
//!
//! The working representation is a flat list of segments: phoneme symbols
//! (`HH`), nucleus letters (`a`) and kana fragments (`ウ`, `ー`, `ッ`)
//! produced by earlier passes. Each pass rewrites the list left to right.

use std::borrow::Cow;

use crate::data::kana;

pub(crate) type Seg = Cow<'static, str>;

/// Expand vowel phonemes into nucleus letters plus tails (`OW` → `o ウ`,
/// `ER` → `a R`). Everything else passes through.
pub(crate) fn expand_vowels(symbols: Vec<String>) -> Vec<Seg> {
    let mut segs = Vec::with_capacity(symbols.len());
    for symbol in symbols {
        match kana::nucleus_segments(&symbol) {
            Some(expansion) => segs.extend(expansion.iter().map(|&seg| Seg::Borrowed(seg))),
            None => segs.push(Seg::Owned(symbol)),
        }
    }
    segs
}

#[inline]
pub(crate) fn is_nucleus(seg: &str) -> bool {
    matches!(seg, "a" | "i" | "u" | "e" | "o")
}

fn starts_geminate(segs: &[Seg]) -> bool {
    kana::GEMINATE_CLUSTERS.iter().any(|cluster| {
        cluster.len() <= segs.len()
            && cluster.iter().zip(segs).all(|(p, seg)| *p == seg.as_ref())
    })
}

/// Insert `ッ` before a geminating cluster that directly follows a bare
/// nucleus. Tails block it: `B AE CH` → `バッチ` but `P IY CH` → `ピーチ`.
pub(crate) fn insert_sokuon(segs: Vec<Seg>) -> Vec<Seg> {
    let mut out: Vec<Seg> = Vec::with_capacity(segs.len());
    for (i, seg) in segs.iter().enumerate() {
        if starts_geminate(&segs[i..]) && out.last().is_some_and(|prev| is_nucleus(prev)) {
            out.push(Seg::Borrowed("ッ"));
        }
        out.push(seg.clone());
    }
    out
}

/// Vocalize every `R` the composer cannot take as an onset.
///
/// `R` followed by a nucleus (directly, or through a `Y` glide) is left for
/// the mora table. Otherwise it lengthens a preceding `a`/`o`, disappears
/// after `ー`, and surfaces as `ア` anywhere else.
pub(crate) fn resolve_r(segs: Vec<Seg>) -> Vec<Seg> {
    let mut out: Vec<Seg> = Vec::with_capacity(segs.len());
    for (i, seg) in segs.iter().enumerate() {
        if seg.as_ref() != "R" {
            out.push(seg.clone());
            continue;
        }
        let onset = match (segs.get(i + 1), segs.get(i + 2)) {
            (Some(next), _) if is_nucleus(next) => true,
            (Some(next), Some(next2)) if next.as_ref() == "Y" && is_nucleus(next2) => true,
            _ => false,
        };
        if onset {
            out.push(seg.clone());
        } else {
            match out.last().map(|prev| prev.as_ref()) {
                Some("a") | Some("o") => out.push(Seg::Borrowed("ー")),
                Some("ー") => {}
                _ => out.push(Seg::Borrowed("ア")),
            }
        }
    }
    out
}

/// Collapse runs of `ー` left over after composition and fallback
/// substitution.
pub(crate) fn collapse_long_marks(segs: &mut Vec<&str>) {
    segs.dedup_by(|seg, prev| *seg == "ー" && *prev == "ー");
}

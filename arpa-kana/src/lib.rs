/*!
A fast ARPAbet-to-katakana transliterator.

Converts phoneme sequences in [ARPAbet](https://en.wikipedia.org/wiki/ARPABET)
notation (as used by the CMU Pronouncing Dictionary) into katakana.

## Usage
```
use arpa_kana::KanaTransliterator;

let kana = KanaTransliterator::default();
assert_eq!(kana.transliterate("HH AH0 L OW1"), "ハロウ");
assert_eq!(kana.transliterate_tokens(["B", "L", "UW"]), "ブルー");

// Unmapped phonemes are dropped unless a fallback is configured.
let kana = KanaTransliterator::builder().unknown("*").build();
assert_eq!(kana.transliterate("XYZ"), "*");
```

For one-off conversions there are free functions over a shared, lazily built
instance:
```
assert_eq!(arpa_kana::arpabet_to_kana("S K AY1"), "スカイ");
```

## Design
Conversion is a fixed pipeline over a flat segment list: normalize tokens
(case, stress markers, silences), expand vowel phonemes into nucleus letters
plus tails, insert sokuon, vocalize non-onset `R`, then greedily compose the
longest table-matching mora at each position. Unknown phonemes never fail;
each one contributes the configured `unknown` string to the output.

The mora table is rendered once into a leftmost-longest Aho-Corasick
automaton when the transliterator is built. A built transliterator is
immutable and can be shared freely across threads.
*/
use std::sync::OnceLock;

use bon::bon;
use daachorse::{CharwiseDoubleArrayAhoCorasick, CharwiseDoubleArrayAhoCorasickBuilder, MatchKind};

pub mod data;
mod mora;
mod phoneme;

use mora::Seg;

/// ARPAbet → katakana converter.
///
/// See the [crate docs](crate) for usage.
#[derive(Clone)]
pub struct KanaTransliterator {
    ac: CharwiseDoubleArrayAhoCorasick<u32>,
    /// Parallel to the automaton's pattern values.
    kanas: Vec<&'static str>,
    unknown: String,
}

#[bon]
impl KanaTransliterator {
    /// [`KanaTransliterator::default()`]
    #[builder]
    pub fn new(
        /// Substituted for each phoneme with no kana mapping.
        /// Defaults to the empty string, which silently drops them.
        #[builder(default, into)]
        unknown: String,
    ) -> Self {
        let (patterns, kanas) = data::kana::mora_table();
        let ac = CharwiseDoubleArrayAhoCorasickBuilder::new()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&patterns)
            .unwrap();
        Self { ac, kanas, unknown }
    }

    /// Convert a whitespace-delimited ARPAbet phoneme string to katakana.
    ///
    /// ## Example
    /// ```
    /// use arpa_kana::KanaTransliterator;
    ///
    /// let kana = KanaTransliterator::default();
    /// assert_eq!(kana.transliterate("T R EY1 N"), "トゥレイン");
    /// assert_eq!(kana.transliterate(""), "");
    /// ```
    pub fn transliterate<S: ?Sized + AsRef<str>>(&self, phonemes: &S) -> String {
        self.transliterate_tokens(phonemes.as_ref().split_whitespace())
    }

    /// Convert a pre-split phoneme token sequence to katakana. Equivalent to
    /// [`transliterate()`](Self::transliterate) on the space-joined tokens.
    pub fn transliterate_tokens<I>(&self, phonemes: I) -> String
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let symbols = phoneme::normalize(phonemes);
        let segs = mora::expand_vowels(symbols);
        let segs = mora::insert_sokuon(segs);
        let segs = mora::resolve_r(segs);
        let mut kanas = self.compose(&segs);
        mora::collapse_long_marks(&mut kanas);
        kanas.concat()
    }

    /// Partition the segment stream into the longest table-matching groups,
    /// left to right, and map each group to its kana. A segment no pattern
    /// covers passes through if it is already katakana (tails, `ッ`) and
    /// becomes the `unknown` fallback otherwise.
    fn compose<'s>(&'s self, segs: &'s [Seg]) -> Vec<&'s str> {
        // Segments are space-terminated in both the haystack and the
        // patterns, so a match can only start and end on segment boundaries.
        let mut line = String::new();
        let mut starts = Vec::with_capacity(segs.len() + 1);
        for seg in segs {
            starts.push(line.len());
            line.push_str(seg);
            line.push(' ');
        }
        starts.push(line.len());

        let mut out = Vec::with_capacity(segs.len());
        let mut i = 0;
        while i < segs.len() {
            let pos = starts[i];
            let window = starts[(i + data::kana::PATTERN_MAX_SEGS).min(segs.len())];
            match self
                .ac
                .leftmost_find_iter(&line[pos..window])
                .next()
                .filter(|m| m.start() == 0)
            {
                Some(m) => {
                    out.push(self.kanas[m.value() as usize]);
                    // Whole segments only; the separator count is the
                    // number of segments consumed.
                    i += line[pos..pos + m.end()]
                        .bytes()
                        .filter(|&b| b == b' ')
                        .count();
                }
                None => {
                    let seg = segs[i].as_ref();
                    out.push(if phoneme::is_katakana(seg) {
                        seg
                    } else {
                        self.unknown.as_str()
                    });
                    i += 1;
                }
            }
        }
        out
    }
}

impl Default for KanaTransliterator {
    /// Drops unknown phonemes. Use [`KanaTransliterator::builder()`] to
    /// configure the `unknown` fallback instead.
    fn default() -> Self {
        Self::builder().build()
    }
}

fn shared() -> &'static KanaTransliterator {
    static SHARED: OnceLock<KanaTransliterator> = OnceLock::new();
    SHARED.get_or_init(KanaTransliterator::default)
}

/// Convert a whitespace-delimited ARPAbet phoneme string to katakana,
/// dropping unmapped phonemes.
///
/// ## Example
/// ```
/// assert_eq!(arpa_kana::arpabet_to_kana("K AO1 R S"), "コース");
/// ```
pub fn arpabet_to_kana<S: ?Sized + AsRef<str>>(phonemes: &S) -> String {
    shared().transliterate(phonemes)
}

/// Convert a pre-split phoneme token sequence to katakana, dropping
/// unmapped phonemes.
///
/// ## Example
/// ```
/// assert_eq!(arpa_kana::arpabet_to_kana_tokens(["B", "ER1", "D"]), "バード");
/// ```
pub fn arpabet_to_kana_tokens<I>(phonemes: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    shared().transliterate_tokens(phonemes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words() {
        let kana = KanaTransliterator::default();
        for (phonemes, expected) in [
            // hello
            ("HH AH0 L OW1", "ハロウ"),
            // sky
            ("S K AY", "スカイ"),
            // train
            ("T R EY N", "トゥレイン"),
            // bout
            ("B AW1 T", "バウトゥ"),
            // 'cause
            ("K AH0 Z", "カズ"),
            // 'course
            ("K AO1 R S", "コース"),
            // frisco
            ("F R IH1 S K OW0", "フリスコウ"),
            // bird
            ("B ER1 D", "バード"),
            // quote
            ("K W OW1 T", "クウォウトゥ"),
            // red
            ("R EH1 D", "レド"),
        ] {
            assert_eq!(kana.transliterate(phonemes), expected, "{phonemes}");
        }
    }

    #[test]
    fn palatalized_onsets() {
        let kana = KanaTransliterator::default();
        // cues
        assert_eq!(kana.transliterate("K Y UW1 Z"), "キューズ");
        // hue
        assert_eq!(kana.transliterate("HH Y UW1"), "ヒュー");
        // ameliorate
        assert_eq!(
            kana.transliterate("AH0 M IY1 L Y ER0 EY2 T"),
            "アミーリャレイトゥ"
        );
        assert_eq!(kana.transliterate("R Y UW1"), "リュー");
    }

    #[test]
    fn affricate_cluster() {
        let kana = KanaTransliterator::default();
        // cats: T S with no nucleus, geminated after the short vowel
        assert_eq!(kana.transliterate("K AE1 T S"), "カッツ");
        // bengtson: T S takes the following nucleus
        assert_eq!(kana.transliterate("B EH1 NG T S AH0 N"), "ベンツァン");
    }

    #[test]
    fn sokuon() {
        let kana = KanaTransliterator::default();
        // batch
        assert_eq!(kana.transliterate("B AE1 CH"), "バッチ");
        // match
        assert_eq!(kana.transliterate("M AE1 CH"), "マッチ");
        // peach: the long vowel blocks gemination
        assert_eq!(kana.transliterate("P IY1 CH"), "ピーチ");
        // amateurish
        assert_eq!(
            kana.transliterate("AE1 M AH0 CH ER2 IH0 SH"),
            "アマッチャリシュ"
        );
    }

    #[test]
    fn r_vocalization() {
        let kana = KanaTransliterator::default();
        // aquamarine
        assert_eq!(kana.transliterate("AA K W AH M ER IY N"), "アクワマリーン");
        // fourthquarter
        assert_eq!(
            kana.transliterate("F AO1 R TH K W AO1 R T ER0"),
            "フォースクウォーター"
        );
        // ear: R disappears after the long mark
        assert_eq!(kana.transliterate("IY1 R"), "イー");
        // lower
        assert_eq!(kana.transliterate("L OW1 ER0"), "ロウアー");
    }

    #[test]
    fn vowelless_codas() {
        let kana = KanaTransliterator::default();
        assert_eq!(kana.transliterate("AH0 M"), "アン");
        assert_eq!(kana.transliterate("T IY1 M"), "ティーン");
    }

    #[test]
    fn unknown_fallback() {
        assert_eq!(arpabet_to_kana("XYZ"), "");

        let kana = KanaTransliterator::builder().unknown("*").build();
        assert_eq!(kana.transliterate("XYZ"), "*");
        assert_eq!(kana.transliterate(""), "");
        // Each unknown phoneme emits the fallback independently.
        assert_eq!(kana.transliterate("XYZ QQQ"), "**");
        // The fallback lands at the unknown's position.
        assert_eq!(kana.transliterate("HH AH0 XYZ L OW1"), "ハ*ロウ");
        // Stress markers outside 0..=2 are not markers at all.
        assert_eq!(kana.transliterate("AH3"), "*");
    }

    #[test]
    fn long_marks_collapse() {
        let kana = KanaTransliterator::builder().unknown("ー").build();
        assert_eq!(kana.transliterate("AO1 R XYZ"), "オー");
    }

    #[test]
    fn token_sequences() {
        let kana = KanaTransliterator::default();
        assert_eq!(kana.transliterate_tokens(["B", "L", "UW"]), "ブルー");
        let owned: Vec<String> = ["HH", "AH0", "L", "OW1"].map(String::from).to_vec();
        assert_eq!(kana.transliterate_tokens(owned), "ハロウ");
        assert_eq!(arpabet_to_kana_tokens(["S", "K", "AY"]), "スカイ");
    }

    #[test]
    fn input_shapes_equivalent() {
        let kana = KanaTransliterator::builder().unknown("*").build();
        for phonemes in [
            "HH AH0 L OW1",
            "B L UW",
            "K AO1 R S",
            "XYZ AH",
            "  HH   AH0 ",
            "",
        ] {
            assert_eq!(
                kana.transliterate(phonemes),
                kana.transliterate_tokens(phonemes.split_whitespace()),
                "{phonemes:?}"
            );
        }
    }

    #[test]
    fn stress_invariant() {
        let kana = KanaTransliterator::default();
        let unstressed = kana.transliterate("HH AH L OW");
        assert_eq!(kana.transliterate("HH AH0 L OW1"), unstressed);
        assert_eq!(kana.transliterate("HH AH2 L OW0"), unstressed);
    }

    #[test]
    fn total_and_pure() {
        // Nonsense never panics and repeated calls agree.
        for phonemes in ["R R R", "ッ", "123 456", "ー ー", "a i u e o", "ア"] {
            assert_eq!(arpabet_to_kana(phonemes), arpabet_to_kana(phonemes));
        }
        assert_eq!(arpabet_to_kana("R R R"), "アアア");
    }

    #[test]
    fn silences_and_case() {
        assert_eq!(arpabet_to_kana("SIL HH AH0 L OW1 SP"), "ハロウ");
        assert_eq!(arpabet_to_kana("hh ah0 l ow1"), "ハロウ");
    }
}

//! ARPAbet → katakana mapping tables.
//!
//! The tables describe three things: how vowel phonemes expand into a
//! nucleus letter plus an optional tail ([`nucleus_segments`]), which kana
//! an onset + nucleus pair renders to ([`CV_ROWS`]), and which kana a
//! consonant renders to when no nucleus follows ([`VOWELLESS_ROWS`]).

/// Nucleus letters, in table column order.
pub const NUCLEI: [&str; 5] = ["a", "i", "u", "e", "o"];

/// The longest pattern in the rendered table, in segments
/// (a two-consonant onset plus its nucleus).
pub const PATTERN_MAX_SEGS: usize = 3;

/// Expand a vowel phoneme into its nucleus letter plus an optional trailing
/// segment: a kana tail for diphthongs and long vowels, or the consonant
/// `R` for the r-colored vowels `ER`/`AXR`. Returns `None` for non-vowels.
pub fn nucleus_segments(symbol: &str) -> Option<&'static [&'static str]> {
    Some(match symbol {
        "AA" | "AE" | "AH" | "AX" => &["a"],
        "AO" => &["o"],
        "AW" => &["a", "ウ"],
        "AY" => &["a", "イ"],
        "EH" => &["e"],
        "ER" | "AXR" => &["a", "R"],
        "EY" => &["e", "イ"],
        "IH" | "IX" => &["i"],
        "IY" => &["i", "ー"],
        "OH" => &["o", "ー"],
        "OW" => &["o", "ウ"],
        "OY" => &["o", "イ"],
        "UH" | "UX" => &["u"],
        "UW" => &["u", "ー"],
        _ => return None,
    })
}

/// Onset (zero, one or two consonant symbols) × nucleus → kana, columns in
/// [`NUCLEI`] order. The empty onset row renders bare vowels.
pub const CV_ROWS: &[(&[&str], [&str; 5])] = &[
    (&[], ["ア", "イ", "ウ", "エ", "オ"]),
    (&["B"], ["バ", "ビ", "ブ", "ベ", "ボ"]),
    (&["CH"], ["チャ", "チ", "チュ", "チェ", "チョ"]),
    (&["D"], ["ダ", "ディ", "ドゥ", "デ", "ド"]),
    (&["DH"], ["ダ", "ディ", "ドゥ", "デ", "ド"]),
    (&["DX"], ["ラ", "リ", "ル", "レ", "ロ"]),
    (&["F"], ["ファ", "フィ", "フ", "フェ", "フォ"]),
    (&["G"], ["ガ", "ギ", "グ", "ゲ", "ゴ"]),
    (&["HH"], ["ハ", "ヒ", "フ", "ヘ", "ホ"]),
    (&["JH"], ["ジャ", "ジ", "ジュ", "ジェ", "ジョ"]),
    (&["K"], ["カ", "キ", "ク", "ケ", "コ"]),
    (&["L"], ["ラ", "リ", "ル", "レ", "ロ"]),
    (&["M"], ["マ", "ミ", "ム", "メ", "モ"]),
    (&["N"], ["ナ", "ニ", "ヌ", "ネ", "ノ"]),
    (&["NG"], ["ンガ", "ンギ", "ング", "ンゲ", "ンゴ"]),
    (&["NX"], ["ナ", "ニ", "ヌ", "ネ", "ノ"]),
    (&["P"], ["パ", "ピ", "プ", "ペ", "ポ"]),
    (&["R"], ["ラ", "リ", "ル", "レ", "ロ"]),
    (&["S"], ["サ", "シ", "ス", "セ", "ソ"]),
    (&["SH"], ["シャ", "シ", "シュ", "シェ", "ショ"]),
    (&["T"], ["タ", "ティ", "トゥ", "テ", "ト"]),
    (&["TH"], ["サ", "シ", "ス", "セ", "ソ"]),
    (&["V"], ["ヴァ", "ヴィ", "ヴ", "ヴェ", "ヴォ"]),
    (&["W"], ["ワ", "ウィ", "ウ", "ウェ", "ウォ"]),
    (&["Y"], ["ヤ", "イ", "ユ", "イェ", "ヨ"]),
    (&["Z"], ["ザ", "ズィ", "ズ", "ゼ", "ゾ"]),
    (&["ZH"], ["ジャ", "ジ", "ジュ", "ジェ", "ジョ"]),
    // Palatalized onsets and the affricate cluster
    (&["K", "Y"], ["キャ", "キィ", "キュ", "キェ", "キョ"]),
    (&["G", "Y"], ["ギャ", "ギィ", "ギュ", "ギェ", "ギョ"]),
    (&["S", "Y"], ["シャ", "シィ", "シュ", "シェ", "ショ"]),
    (&["Z", "Y"], ["ジャ", "ジィ", "ジュ", "ジェ", "ジョ"]),
    (&["T", "Y"], ["チャ", "チィ", "チュ", "チェ", "チョ"]),
    (&["D", "Y"], ["ジャ", "ジィ", "ジュ", "ジェ", "ジョ"]),
    (&["HH", "Y"], ["ヒャ", "ヒィ", "ヒュ", "ヒェ", "ヒョ"]),
    (&["B", "Y"], ["ビャ", "ビィ", "ビュ", "ビェ", "ビョ"]),
    (&["P", "Y"], ["ピャ", "ピィ", "ピュ", "ピェ", "ピョ"]),
    (&["M", "Y"], ["ミャ", "ミィ", "ミュ", "ミェ", "ミョ"]),
    (&["R", "Y"], ["リャ", "リィ", "リュ", "リェ", "リョ"]),
    (&["L", "Y"], ["リャ", "リィ", "リュ", "リェ", "リョ"]),
    (&["N", "Y"], ["ニャ", "ニィ", "ニュ", "ニェ", "ニョ"]),
    (&["F", "Y"], ["フャ", "フィ", "フュ", "フェ", "フョ"]),
    (&["T", "S"], ["ツァ", "ツィ", "ツ", "ツェ", "ツォ"]),
];

/// Kana for a consonant (or the `T S` cluster) with no following nucleus.
///
/// `R` has no row: the vocalization pass consumes every `R` that is not an
/// onset, so a vowelless `R` never reaches the composer.
pub const VOWELLESS_ROWS: &[(&[&str], &str)] = &[
    (&["B"], "ブ"),
    (&["CH"], "チ"),
    (&["D"], "ド"),
    (&["DH"], "ズ"),
    (&["DX"], "ル"),
    (&["F"], "フ"),
    (&["G"], "グ"),
    (&["HH"], "フ"),
    (&["JH"], "ジ"),
    (&["K"], "ク"),
    (&["L"], "ル"),
    (&["M"], "ン"),
    (&["N"], "ン"),
    (&["NG"], "ン"),
    (&["NX"], "ン"),
    (&["P"], "プ"),
    (&["S"], "ス"),
    (&["SH"], "シュ"),
    (&["T"], "トゥ"),
    (&["TH"], "ス"),
    (&["V"], "ヴ"),
    (&["W"], "ウ"),
    (&["Y"], "イ"),
    (&["Z"], "ズ"),
    (&["ZH"], "ジュ"),
    (&["T", "S"], "ツ"),
];

/// Clusters that geminate (take a leading `ッ`) right after a bare nucleus.
pub const GEMINATE_CLUSTERS: &[&[&str]] = &[&["T", "S"], &["CH"], &["SH"], &["JH"], &["ZH"]];

/// Render the full pattern table for the composer: space-terminated segment
/// patterns and the parallel kana outputs the automaton values index into.
///
/// The separator after every segment means a match can only start and end on
/// a segment boundary, never inside a symbol.
pub(crate) fn mora_table() -> (Vec<String>, Vec<&'static str>) {
    let mut patterns = Vec::new();
    let mut kanas = Vec::new();
    for (onset, row) in CV_ROWS {
        for (nucleus, kana) in NUCLEI.iter().zip(row) {
            patterns.push(join_pattern(onset, Some(*nucleus)));
            kanas.push(*kana);
        }
    }
    for (cluster, kana) in VOWELLESS_ROWS {
        patterns.push(join_pattern(cluster, None));
        kanas.push(*kana);
    }
    (patterns, kanas)
}

fn join_pattern(segs: &[&str], nucleus: Option<&str>) -> String {
    let mut pattern = String::new();
    for seg in segs.iter().chain(&nucleus) {
        pattern.push_str(seg);
        pattern.push(' ');
    }
    pattern
}

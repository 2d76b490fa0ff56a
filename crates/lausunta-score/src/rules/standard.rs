// Built-in rule table values shared by every learning language the trainer
// ships with. Other languages can load their own table from JSON.

/// Accented and special letters that are treated as their plain forms.
/// The first replacement of each entry is the canonical one.
pub(super) const EQUIVALENTS: &[(char, &[&str])] = &[
    // Germanic umlauts
    ('\u{00E4}', &["a", "ae"]), // ä
    ('\u{00F6}', &["o", "oe"]), // ö
    ('\u{00FC}', &["u", "ue"]), // ü
    ('\u{00E5}', &["a", "aa"]), // å
    // Romance accents
    ('\u{00E1}', &["a"]), // á
    ('\u{00E0}', &["a"]), // à
    ('\u{00E2}', &["a"]), // â
    ('\u{00E3}', &["a"]), // ã
    ('\u{00E9}', &["e"]), // é
    ('\u{00E8}', &["e"]), // è
    ('\u{00EA}', &["e"]), // ê
    ('\u{00EB}', &["e"]), // ë
    ('\u{00ED}', &["i"]), // í
    ('\u{00EC}', &["i"]), // ì
    ('\u{00EE}', &["i"]), // î
    ('\u{00EF}', &["i"]), // ï
    ('\u{00F3}', &["o"]), // ó
    ('\u{00F2}', &["o"]), // ò
    ('\u{00F4}', &["o"]), // ô
    ('\u{00F5}', &["o"]), // õ
    ('\u{00FA}', &["u"]), // ú
    ('\u{00F9}', &["u"]), // ù
    ('\u{00FB}', &["u"]), // û
    ('\u{00FD}', &["y"]), // ý
    ('\u{00FF}', &["y"]), // ÿ
    // Special letters
    ('\u{00F1}', &["n"]),  // ñ
    ('\u{00E7}', &["c"]),  // ç
    ('\u{00DF}', &["ss"]), // ß
    ('\u{00E6}', &["ae"]), // æ
    ('\u{00F8}', &["o"]),  // ø
    ('\u{0153}', &["oe"]), // œ
    // Czech, Polish, Croatian, Slovak
    ('\u{010D}', &["c"]), // č
    ('\u{0107}', &["c"]), // ć
    ('\u{0161}', &["s"]), // š
    ('\u{015B}', &["s"]), // ś
    ('\u{017E}', &["z"]), // ž
    ('\u{017A}', &["z"]), // ź
    ('\u{017C}', &["z"]), // ż
    ('\u{0111}', &["d"]), // đ
    ('\u{010F}', &["d"]), // ď
    ('\u{0159}', &["r"]), // ř
    ('\u{0142}', &["l"]), // ł
    ('\u{013E}', &["l"]), // ľ
    ('\u{0148}', &["n"]), // ň
    ('\u{0144}', &["n"]), // ń
    ('\u{0165}', &["t"]), // ť
    ('\u{011B}', &["e"]), // ě
    ('\u{016F}', &["u"]), // ů
    // Ukrainian, Serbian
    ('\u{0454}', &["e"]),  // є
    ('\u{0456}', &["i"]),  // і
    ('\u{0457}', &["i"]),  // ї
    ('\u{0491}', &["g"]),  // ґ
    ('\u{0458}', &["j"]),  // ј
    ('\u{0459}', &["lj"]), // љ
    ('\u{045A}', &["nj"]), // њ
    ('\u{045B}', &["c"]),  // ћ
    ('\u{045F}', &["dz"]), // џ
    // Hungarian
    ('\u{0151}', &["o"]), // ő
    ('\u{0171}', &["u"]), // ű
    // Romanian
    ('\u{0103}', &["a"]), // ă
    ('\u{0219}', &["s"]), // ș
    ('\u{021B}', &["t"]), // ț
];

/// Consonants whose doubling is a minor mistake.
pub(super) const CONSONANT_DOUBLES: &[char] = &[
    'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'r', 's', 't', 'v', 'w', 'z',
];

/// Vowels whose doubling (long vowel) is a minor mistake.
pub(super) const VOWEL_DOUBLES: &[char] = &['\u{00E4}', 'a', 'e', 'i', 'o', 'u'];

/// Voiced / voiceless consonant pairs.
pub(super) const VOICING: &[(char, char)] =
    &[('d', 't'), ('b', 'p'), ('g', 'k'), ('v', 'f'), ('z', 's')];

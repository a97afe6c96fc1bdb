//! Built-in phonetic hints for the demonstration texts.
//!
//! Tooltips show a romanization or IPA string next to the translation when
//! one is known. This is a fixed demo table, not a pronunciation engine.

const DEMO_PHONETICS: &[(&str, &str)] = &[
    ("今天", "Jīntiān"),
    ("天氣", "Tiānqì"),
    ("很好", "Hěn hǎo"),
    ("適合", "Shìhé"),
    ("寫程式", "Xiě chéngshì"),
    ("寫", "Xiě"),
    ("程式", "Chéngshì"),
    ("真好", "Zhēn hǎo"),
    ("こうした", "Kōshita"),
    ("問題", "Mondai"),
    ("は", "Wa"),
    ("解決", "Kaiketsu"),
    ("できます", "Dekimasu"),
    ("でき", "Deki"),
    ("ます", "Masu"),
    ("こんにちは", "Konnichiwa"),
    ("世界", "Sekai"),
    ("안녕하세요", "Annyeonghaseyo"),
    ("사랑해요", "Saranghaeyo"),
    ("Accessibility", "/əkˌses.əˈbɪl.ə.t̬i/"),
    ("Essential", "/ɪˈsen.ʃəl/"),
    ("Hello", "/həˈloʊ/"),
    ("World", "/wɝːld/"),
    ("Namaste", "Namaste"),
    ("duniya", "Duniya"),
    ("नमस्ते", "Namaste"),
    ("दुनिया", "Duniya"),
    ("Guten", "ɡuːtən"),
    ("Tag", "taːk"),
    ("Bonjour", "/bɔ̃.ʒuʁ/"),
    ("le", "/lə/"),
    ("monde", "/mɔ̃d/"),
];

/// Look up a phonetic hint for `text`, ignoring attached sentence
/// punctuation (`"World."` finds the entry for `"World"`).
pub fn demo_phonetic(text: &str) -> Option<&'static str> {
    let clean: String = text
        .chars()
        .filter(|c| !matches!(c, '.' | ',' | '!' | '?' | ';' | ':' | '，' | '。' | '！' | '？'))
        .collect();
    DEMO_PHONETICS
        .iter()
        .find(|(word, _)| *word == clean)
        .map(|(_, phonetic)| *phonetic)
}

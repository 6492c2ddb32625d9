use crate::lexicon::VerbLexicon;
use crate::normalizer::{Normalizer, NormalizerConfig, Stage};

const VERBS_DICT: &str = include_str!("./resources/verbs.dict");

fn normalizer(config: NormalizerConfig) -> Normalizer {
    let verbs = VerbLexicon::from_reader(VERBS_DICT.as_bytes()).unwrap();
    Normalizer::new(config, verbs).unwrap()
}

#[test]
fn test_load_verbs() {
    let verbs = VerbLexicon::from_reader(VERBS_DICT.as_bytes()).unwrap();
    assert_eq!(verbs.stems(), &["روم", "رود", "گردد", "خورد"]);
}

#[test]
fn test_glued_verb_prefix() {
    let normalizer = normalizer(NormalizerConfig::default());
    assert_eq!(
        normalizer.normalize("او برمیگردد").unwrap(),
        "او برمی\u{200C}گردد"
    );
    assert_eq!(
        normalizer.normalize("نمیخورد").unwrap(),
        "نمی\u{200C}خورد"
    );
}

#[test]
fn test_glued_verb_prefix_without_lexicon() {
    let normalizer =
        Normalizer::new(NormalizerConfig::default(), VerbLexicon::from_path_or_empty("no/such/file"))
            .unwrap();
    assert!(normalizer.tables().verbs().is_empty());
    assert_eq!(normalizer.normalize("او برمیگردد").unwrap(), "او برمیگردد");
}

#[test]
fn test_date() {
    let normalizer = normalizer(NormalizerConfig::default());
    let normalized = normalizer.normalize("امروز 1402/11/29 است").unwrap();
    assert_eq!(
        normalized,
        "امروز بیست و نهم\u{0650} یازده\u{0650} هزار و چهارصد و دو است"
    );
    assert!(!normalized.chars().any(|c| c.is_numeric()));
}

#[test]
fn test_unmatched_bracket() {
    let normalizer = normalizer(NormalizerConfig::default());
    assert_eq!(normalizer.normalize("(hello").unwrap(), "hello");
}

#[test]
fn test_merged_numbers() {
    let normalizer = normalizer(NormalizerConfig::default());
    assert_eq!(
        normalizer.normalize("بیست\u{200C}و\u{200C}پنج").unwrap(),
        "بیست و پنج"
    );
}

#[test]
fn test_suffixes() {
    let normalizer = normalizer(NormalizerConfig::default());
    assert_eq!(
        normalizer.normalize("کتاب ها و خانهها رفته اند").unwrap(),
        "کتاب\u{200C}ها و خانه\u{200C}ها رفته\u{200C}اند"
    );
}

#[test]
fn test_disabled_stages() {
    let config = "plural-suffix-joining,postfix-clitic-joining"
        .split(',')
        .map(|name| name.parse::<Stage>().unwrap())
        .fold(NormalizerConfig::default(), |config, stage| config.enable(stage, false));
    let normalizer = normalizer(config);
    assert_eq!(
        normalizer.normalize("کتاب ها و خانهها رفته اند").unwrap(),
        "کتاب ها و خانهها رفته اند"
    );
}

#[test]
fn test_balanced_output() {
    let normalizer = normalizer(NormalizerConfig::default());
    for input in ["«سلام (دنیا»", "[۱۲", "متن) بی (پرانتز", "{«()»}"] {
        let normalized = normalizer.normalize(input).unwrap();
        let mut stack = vec![];
        for c in normalized.chars() {
            match c {
                '(' | '[' | '{' | '«' => stack.push(c),
                ')' => assert_eq!(stack.pop(), Some('(')),
                ']' => assert_eq!(stack.pop(), Some('[')),
                '}' => assert_eq!(stack.pop(), Some('{')),
                '»' => assert_eq!(stack.pop(), Some('«')),
                _ => {}
            }
        }
        assert!(stack.is_empty(), "{:?}", normalized);
    }
}

#[test]
fn test_glued_verb_prefix_with_clitic() {
    let normalizer = Normalizer::new(NormalizerConfig::default(), VerbLexicon::bundled()).unwrap();
    assert_eq!(
        normalizer.normalize("میخوردمش").unwrap(),
        "می\u{200C}خوردمش"
    );
    assert_eq!(
        normalizer.normalize("ما میکنیمش").unwrap(),
        "ما می\u{200C}کنیمش"
    );
}

#[test]
fn test_negative_number_before_punctuation() {
    let normalizer = normalizer(NormalizerConfig::default());
    assert_eq!(normalizer.normalize("-5 درجه").unwrap(), "منفی پنج درجه");
    assert_eq!(
        normalizer.normalize("دما به -5 رسید").unwrap(),
        "دما به منفی پنج رسید"
    );
}

#[test]
fn test_unspellable_digits_pass_through() {
    let normalizer = normalizer(NormalizerConfig::default());
    assert_eq!(normalizer.normalize("قیمت ৫ تومان").unwrap(), "قیمت ৫ تومان");
    assert_eq!(normalizer.normalize("قیمت ５ تومان").unwrap(), "قیمت ５ تومان");
}

#[test]
fn test_long_digit_run() {
    let normalizer = normalizer(NormalizerConfig::default());
    assert_eq!(
        normalizer.normalize("شماره 12345678901234567890 است").unwrap(),
        "شماره یک دو سه چهار پنج شش هفت هشت نه صفر یک دو سه چهار پنج شش هفت هشت نه صفر است"
    );
}

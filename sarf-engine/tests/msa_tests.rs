//! MSA paradigm tests for sarf-engine
//!
//! Tests cover:
//! - Sound, hollow, defective and doubled stem I cells
//! - Derived stems, quadrilaterals and stem VIII infix assimilation
//! - Hamza seating and the hamzated imperatives
//! - Participles, validation errors and passive gaps
//!
//! Expected forms are Buckwalter strings.

use sarf_core::{
    parse_arabic, to_buckwalter, ConjugationParameters, Dialect, Gender, Mood, Number, Person,
    Root, SarfError, Stem, Stem1Context, Tashkil, Voice,
};
use sarf_engine::{generate, paradigm, participle};

use Gender::*;
use Number::*;
use Person::*;

fn root(text: &str) -> Root {
    text.parse().unwrap()
}

fn ctx(past: Tashkil, present: Tashkil) -> Stem1Context {
    Stem1Context::new(past, present)
}

fn a_u() -> Stem1Context {
    ctx(Tashkil::Fatha, Tashkil::Dhamma)
}

fn a_i() -> Stem1Context {
    ctx(Tashkil::Fatha, Tashkil::Kasra)
}

fn a_a() -> Stem1Context {
    ctx(Tashkil::Fatha, Tashkil::Fatha)
}

fn bw(text: &str, params: ConjugationParameters, ctx: Option<Stem1Context>) -> Vec<String> {
    generate(&root(text), &params, ctx.as_ref())
        .unwrap_or_else(|e| panic!("{text} {params}: {e}"))
        .to_buckwalter()
}

fn one(text: &str, params: ConjugationParameters, ctx: Option<Stem1Context>) -> String {
    let mut forms = bw(text, params, ctx);
    assert_eq!(forms.len(), 1, "{text} {params}: {forms:?}");
    forms.remove(0)
}

fn perfect(stem: Stem, person: Person, gender: Gender, number: Number) -> ConjugationParameters {
    ConjugationParameters::perfect(stem, person, gender, number)
}

fn present(stem: Stem, mood: Mood, person: Person, gender: Gender, number: Number) -> ConjugationParameters {
    ConjugationParameters::present(stem, mood, person, gender, number)
}

// ============================================================================
// Sound Stem I
// ============================================================================

#[test]
fn test_sound_perfect_cells() {
    let c = Some(a_u());
    assert_eq!(one("ك-ت-ب", perfect(Stem::I, Third, Male, Singular), c), "kataba");
    assert_eq!(one("ك-ت-ب", perfect(Stem::I, Third, Female, Singular), c), "katabato");
    assert_eq!(one("ك-ت-ب", perfect(Stem::I, First, Male, Singular), c), "katabotu");
    assert_eq!(one("ك-ت-ب", perfect(Stem::I, Third, Male, Plural), c), "katabuwA");
    assert_eq!(one("ك-ت-ب", perfect(Stem::I, Third, Female, Plural), c), "katabona");
    assert_eq!(one("ك-ت-ب", perfect(Stem::I, Second, Female, Plural), c), "katabotuna~");
    assert_eq!(one("ك-ت-ب", perfect(Stem::I, Third, Female, Dual), c), "katabataA");
}

#[test]
fn test_sound_present_moods() {
    let c = Some(a_u());
    assert_eq!(
        one("ك-ت-ب", present(Stem::I, Mood::Indicative, Third, Male, Singular), c),
        "yakotubu"
    );
    assert_eq!(
        one("ك-ت-ب", present(Stem::I, Mood::Indicative, Second, Female, Singular), c),
        "takotubiyna"
    );
    assert_eq!(
        one("ك-ت-ب", present(Stem::I, Mood::Subjunctive, Third, Male, Plural), c),
        "yakotubuwA"
    );
    assert_eq!(
        one("ك-ت-ب", present(Stem::I, Mood::Jussive, Third, Female, Plural), c),
        "yakotubona"
    );
    assert_eq!(
        one("ك-ت-ب", present(Stem::I, Mood::Indicative, Third, Male, Dual), c),
        "yakotubaAni"
    );
}

#[test]
fn test_sound_imperative_takes_rounded_wasl() {
    let imp = ConjugationParameters::imperative(Stem::I, Male, Singular);
    assert_eq!(one("ك-ت-ب", imp, Some(a_u())), "Aukotubo");
    assert_eq!(one("ض-ر-ب", imp, Some(a_i())), "AiDoribo");
}

#[test]
fn test_sound_passive() {
    let c = Some(a_u());
    assert_eq!(
        one("ك-ت-ب", perfect(Stem::I, Third, Male, Singular).passive(), c),
        "kutiba"
    );
    assert_eq!(
        one(
            "ك-ت-ب",
            present(Stem::I, Mood::Indicative, Third, Male, Singular).passive(),
            c
        ),
        "yukotabu"
    );
}

// ============================================================================
// Weak Roots
// ============================================================================

#[test]
fn test_hollow_stem_one() {
    let c = Some(a_u());
    assert_eq!(one("ق-و-ل", perfect(Stem::I, Third, Male, Singular), c), "qaAla");
    assert_eq!(one("ق-و-ل", perfect(Stem::I, First, Male, Singular), c), "qulotu");
    assert_eq!(
        one("ق-و-ل", present(Stem::I, Mood::Indicative, Third, Male, Singular), c),
        "yaquwlu"
    );
    assert_eq!(
        one("ق-و-ل", present(Stem::I, Mood::Jussive, Third, Male, Singular), c),
        "yaqulo"
    );
    assert_eq!(
        one("ق-و-ل", ConjugationParameters::imperative(Stem::I, Male, Singular), c),
        "qulo"
    );
    assert_eq!(
        one("ق-و-ل", perfect(Stem::I, Third, Male, Singular).passive(), c),
        "qiyla"
    );
}

#[test]
fn test_defective_stem_one() {
    let c = Some(a_i());
    assert_eq!(one("ر-م-ي", perfect(Stem::I, Third, Male, Singular), c), "ramaY");
    assert_eq!(one("ر-م-ي", perfect(Stem::I, Third, Male, Plural), c), "ramawoA");
    assert_eq!(one("ر-م-ي", perfect(Stem::I, First, Male, Singular), c), "ramayotu");
    assert_eq!(
        one("ر-م-ي", present(Stem::I, Mood::Indicative, Third, Male, Singular), c),
        "yaromiy"
    );
    assert_eq!(
        one("ر-م-ي", present(Stem::I, Mood::Jussive, Third, Male, Singular), c),
        "yaromi"
    );
    assert_eq!(
        one("ر-م-ي", present(Stem::I, Mood::Indicative, Third, Male, Plural), c),
        "yaromuwna"
    );

    let c = Some(a_u());
    assert_eq!(one("د-ع-و", perfect(Stem::I, Third, Male, Singular), c), "daEaA");
    assert_eq!(
        one("د-ع-و", present(Stem::I, Mood::Indicative, Third, Male, Singular), c),
        "yadoEuw"
    );
}

#[test]
fn test_assimilated_drops_waw() {
    let c = Some(a_i());
    assert_eq!(
        one("و-ع-د", present(Stem::I, Mood::Indicative, Third, Male, Singular), c),
        "yaEidu"
    );
    assert_eq!(one("و-ع-د", perfect(Stem::I, Third, Male, Singular), c), "waEada");
}

#[test]
fn test_doubled_contraction() {
    let c = Some(a_u());
    assert_eq!(one("د-ل-ل", perfect(Stem::I, Third, Male, Singular), c), "dala~");
    assert_eq!(one("د-ل-ل", perfect(Stem::I, First, Male, Singular), c), "dalalotu");
}

#[test]
fn test_doubled_jussive_has_three_forms() {
    let forms = bw(
        "د-ل-ل",
        present(Stem::I, Mood::Jussive, Third, Male, Singular),
        Some(a_u()),
    );
    assert_eq!(forms, vec!["yadula~", "yaduli~", "yadolulo"]);
}

// ============================================================================
// Derived Stems
// ============================================================================

#[test]
fn test_derived_stems() {
    assert_eq!(one("ع-ل-م", present(Stem::II, Mood::Indicative, Third, Male, Singular), None), "yuEali~mu");
    assert_eq!(one("ك-ر-م", perfect(Stem::IV, Third, Male, Singular), None), ">akorama");
    assert_eq!(one("ك-ر-م", present(Stem::IV, Mood::Indicative, Third, Male, Singular), None), "yukorimu");
    assert_eq!(
        one("ك-ر-م", ConjugationParameters::imperative(Stem::IV, Male, Singular), None),
        ">akorimo"
    );
    assert_eq!(one("خ-ر-ج", perfect(Stem::X, Third, Male, Singular), None), "Aisotaxoraja");
    assert_eq!(
        one("خ-ر-ج", present(Stem::X, Mood::Indicative, Third, Male, Singular), None),
        "yasotaxoriju"
    );
    assert_eq!(one("ح-م-ر", perfect(Stem::IX, Third, Male, Singular), None), "AiHomara~");
}

#[test]
fn test_quadrilateral() {
    assert_eq!(one("د-ح-ر-ج", perfect(Stem::QuadI, Third, Male, Singular), None), "daHoraja");
    assert_eq!(
        one("د-ح-ر-ج", present(Stem::QuadI, Mood::Indicative, Third, Male, Singular), None),
        "yudaHoriju"
    );
}

#[test]
fn test_quadrilateral_four_contracts_r4() {
    let imp = |gender, number| ConjugationParameters::imperative(Stem::QuadIV, gender, number);
    let cells = [
        (perfect(Stem::QuadIV, Third, Male, Singular), "اِطْمَأَنَّ"),
        (perfect(Stem::QuadIV, Third, Female, Singular), "اِطْمَأَنَّتْ"),
        (perfect(Stem::QuadIV, Second, Male, Singular), "اِطْمَأْنَنْتَ"),
        (perfect(Stem::QuadIV, Second, Female, Singular), "اِطْمَأْنَنْتِ"),
        (perfect(Stem::QuadIV, First, Male, Singular), "اِطْمَأْنَنْتُ"),
        (perfect(Stem::QuadIV, Third, Male, Dual), "اِطْمَأَنَّا"),
        (perfect(Stem::QuadIV, Third, Female, Dual), "اِطْمَأَنَّتَا"),
        (perfect(Stem::QuadIV, Second, Male, Dual), "اِطْمَأْنَنْتُمَا"),
        (perfect(Stem::QuadIV, Third, Male, Plural), "اِطْمَأَنُّوا"),
        (perfect(Stem::QuadIV, Third, Female, Plural), "اِطْمَأْنَنَّ"),
        (perfect(Stem::QuadIV, Second, Male, Plural), "اِطْمَأْنَنْتُمْ"),
        (perfect(Stem::QuadIV, Second, Female, Plural), "اِطْمَأْنَنْتُنَّ"),
        (perfect(Stem::QuadIV, First, Male, Plural), "اِطْمَأْنَنَّا"),
        (present(Stem::QuadIV, Mood::Indicative, Third, Male, Singular), "يَطْمَئِنُّ"),
        (present(Stem::QuadIV, Mood::Indicative, Second, Female, Singular), "تَطْمَئِنِّينَ"),
        (present(Stem::QuadIV, Mood::Indicative, First, Male, Singular), "أَطْمَئِنُّ"),
        (present(Stem::QuadIV, Mood::Indicative, Third, Male, Dual), "يَطْمَئِنَّانِ"),
        (present(Stem::QuadIV, Mood::Indicative, Third, Male, Plural), "يَطْمَئِنُّونَ"),
        (present(Stem::QuadIV, Mood::Indicative, Third, Female, Plural), "يَطْمَأْنِنَّ"),
        (present(Stem::QuadIV, Mood::Indicative, Second, Female, Plural), "تَطْمَأْنِنَّ"),
        (present(Stem::QuadIV, Mood::Subjunctive, Third, Male, Singular), "يَطْمَئِنَّ"),
        (present(Stem::QuadIV, Mood::Subjunctive, Second, Female, Singular), "تَطْمَئِنِّي"),
        (present(Stem::QuadIV, Mood::Subjunctive, Third, Male, Dual), "يَطْمَئِنَّا"),
        (present(Stem::QuadIV, Mood::Jussive, Third, Male, Singular), "يَطْمَئِنَّ"),
        (present(Stem::QuadIV, Mood::Jussive, First, Male, Plural), "نَطْمَئِنَّ"),
        (present(Stem::QuadIV, Mood::Jussive, Third, Male, Plural), "يَطْمَئِنُّوا"),
        (present(Stem::QuadIV, Mood::Jussive, Third, Female, Plural), "يَطْمَأْنِنَّ"),
        (imp(Male, Singular), "اِطْمَئِنَّ"),
        (imp(Female, Singular), "اِطْمَئِنِّي"),
        (imp(Male, Dual), "اِطْمَئِنَّا"),
        (imp(Male, Plural), "اِطْمَئِنُّوا"),
        (imp(Female, Plural), "اِطْمَأْنِنَّ"),
    ];
    for (params, expected) in cells {
        let expected = to_buckwalter(&parse_arabic(expected).unwrap());
        assert_eq!(one("ط-م-ء-ن", params, None), expected, "{params}");
    }
}

#[test]
fn test_quadrilateral_four_has_no_passive() {
    let passive = perfect(Stem::QuadIV, Third, Male, Singular).passive();
    assert!(matches!(
        generate(&root("ط-م-ء-ن"), &passive, None),
        Err(SarfError::UnhandledMorphology { .. })
    ));
    let cells = paradigm(&root("ط-م-ء-ن"), Stem::QuadIV, None, Dialect::Msa).unwrap();
    assert_eq!(cells.len(), 13 + 39 + 5);
    assert!(matches!(
        generate(
            &root("ط-م-ء-ن"),
            &perfect(Stem::QuadIV, Third, Male, Singular).in_dialect(Dialect::Levantine),
            None
        ),
        Err(SarfError::UnsupportedStem { .. })
    ));
}

#[test]
fn test_final_nun_merges_with_suffix_nun() {
    let c = Some(a_u());
    assert_eq!(one("س-ك-ن", perfect(Stem::I, First, Male, Plural), c), "sakana~A");
    assert_eq!(one("س-ك-ن", perfect(Stem::I, Third, Female, Plural), c), "sakana~");
    assert_eq!(one("ض-م-ن", perfect(Stem::V, First, Male, Plural), None), "taDama~na~A");
}

#[test]
fn test_stem_eight_assimilation() {
    let p = perfect(Stem::VIII, Third, Male, Singular);
    assert_eq!(one("ص-ل-ح", p, None), "AiSoTalaHa");
    assert_eq!(one("ذ-خ-ر", p, None), "Aida~xara");
    assert_eq!(one("و-ص-ل", p, None), "Aita~Sala");
    assert_eq!(one("ع-م-ل", p, None), "AiEotamala");
}

// ============================================================================
// Hamza
// ============================================================================

#[test]
fn test_hamza_seating() {
    assert_eq!(one("ء-ك-ل", perfect(Stem::I, Third, Male, Singular), Some(a_u())), ">akala");
    assert_eq!(one("س-ء-ل", perfect(Stem::I, Third, Male, Singular), Some(a_a())), "sa>ala");
    assert_eq!(
        one("س-ء-ل", present(Stem::I, Mood::Indicative, Third, Male, Singular), Some(a_a())),
        "yaso>alu"
    );
    assert_eq!(one("ق-ر-ء", perfect(Stem::I, Third, Male, Singular), Some(a_a())), "qara>a");
}

#[test]
fn test_hamza_merges_and_imperatives() {
    assert_eq!(
        one("ء-ك-ل", present(Stem::I, Mood::Indicative, First, Male, Singular), Some(a_u())),
        "|kulu"
    );
    assert_eq!(
        one("ء-ك-ل", ConjugationParameters::imperative(Stem::I, Male, Singular), Some(a_u())),
        "kulo"
    );
}

// ============================================================================
// Participles
// ============================================================================

#[test]
fn test_participles() {
    let word = participle(&root("ك-ت-ب"), Stem::I, Voice::Active, Some(&a_u())).unwrap();
    assert_eq!(sarf_core::to_buckwalter(&word), "kaAtib");
    let word = participle(&root("خ-ر-ج"), Stem::X, Voice::Active, None).unwrap();
    assert_eq!(sarf_core::to_buckwalter(&word), "musotaxorij");
    let word = participle(&root("ق-ر-ء"), Stem::I, Voice::Active, None).unwrap();
    assert_eq!(sarf_core::to_buckwalter(&word), "qaAri}");
}

// ============================================================================
// Errors and Gaps
// ============================================================================

#[test]
fn test_arity_mismatch_both_ways() {
    assert!(matches!(
        generate(&root("ك-ت-ب"), &perfect(Stem::QuadI, Third, Male, Singular), None),
        Err(SarfError::InvalidRootArity { radicals: 3, stem: Some(Stem::QuadI) })
    ));
    assert!(matches!(
        generate(&root("د-ح-ر-ج"), &perfect(Stem::II, Third, Male, Singular), None),
        Err(SarfError::InvalidRootArity { radicals: 4, stem: Some(Stem::II) })
    ));
}

#[test]
fn test_missing_stem_one_context() {
    assert!(matches!(
        generate(&root("ك-ت-ب"), &perfect(Stem::I, Third, Male, Singular), None),
        Err(SarfError::MissingStem1Context)
    ));
}

#[test]
fn test_passive_gaps() {
    let passive = perfect(Stem::III, Third, Male, Singular).passive();
    assert!(matches!(
        generate(&root("ح-ج-ج"), &passive, None),
        Err(SarfError::UnhandledMorphology { .. })
    ));
    assert!(generate(&root("ق-ت-ل"), &passive, None).is_ok());

    let passive = perfect(Stem::IX, Third, Male, Singular).passive();
    assert!(matches!(
        generate(&root("ح-م-ر"), &passive, None),
        Err(SarfError::UnhandledMorphology { .. })
    ));
}

#[test]
fn test_generation_is_deterministic() {
    let params = present(Stem::I, Mood::Jussive, Second, Male, Singular);
    let first = generate(&root("م-د-د"), &params, Some(&a_u())).unwrap();
    let second = generate(&root("م-د-د"), &params, Some(&a_u())).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_paradigm_covers_every_cell() {
    let cells = paradigm(&root("ك-ت-ب"), Stem::I, Some(&a_u()), Dialect::Msa).unwrap();
    assert_eq!(cells.len(), 109);
    assert!(cells.iter().all(|(_, result)| !result.is_empty()));
}

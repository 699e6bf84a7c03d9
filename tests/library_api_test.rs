//! The documented scenarios, exercised through the public library API.

use pretty_assertions::assert_eq;
use shroomcheck::classifier::UNKNOWN_REASON;
use shroomcheck::{
    diagnose, handle, DiagnosisRequest, GillColor, GillSize, KnowledgeBase, Odor, Specimen,
    StalkRoot, Verdict,
};

#[test]
fn documented_scenarios() {
    use GillColor::{Black, Buff};
    use GillSize::{Broad, Narrow};
    use StalkRoot::{Bulbous, Missing};

    let cases = [
        (Odor::Almond, Broad, Black, Bulbous, Verdict::Safe, "Almond"),
        (Odor::Foul, Broad, Black, Bulbous, Verdict::Poisonous, "Foul"),
        (Odor::None, Narrow, Black, Bulbous, Verdict::Poisonous, "narrow"),
        (Odor::None, Broad, Buff, Bulbous, Verdict::Poisonous, "buff"),
        (Odor::None, Broad, Black, Missing, Verdict::Poisonous, "root"),
        (Odor::None, Broad, Black, Bulbous, Verdict::Safe, "benign"),
    ];

    for (odor, size, color, root, verdict, mention) in cases {
        let result = diagnose(odor, size, color, root);
        assert_eq!(result.verdict(), verdict, "{odor} {size} {color} {root}");
        assert!(
            result.reason().contains(mention),
            "reason {:?} should mention {mention}",
            result.reason()
        );
    }
}

#[test]
fn request_from_raw_codes_matches_direct_call() {
    let request = DiagnosisRequest::from_codes("n", "b", "k", "?").unwrap();
    let response = handle(&request);
    assert_eq!(
        response.result,
        diagnose(Odor::None, GillSize::Broad, GillColor::Black, StalkRoot::Missing)
    );
}

#[test]
fn custom_knowledge_base_without_odorless_rules_reports_unknown() {
    let standard = KnowledgeBase::standard();
    let odor_only = KnowledgeBase::from_rules(&standard.rules()[..2]);
    let specimen = Specimen::new(Odor::None, GillSize::Broad, GillColor::Black, StalkRoot::Bulbous);

    let result = odor_only.evaluate(&specimen);
    assert_eq!(result.verdict(), Verdict::Unknown);
    assert_eq!(result.reason(), UNKNOWN_REASON);

    let foul = Specimen::new(Odor::Foul, GillSize::Broad, GillColor::Black, StalkRoot::Bulbous);
    assert_eq!(odor_only.evaluate(&foul).verdict(), Verdict::Poisonous);
}

use dentara_calculators::calculators::recession::{
    classify_recession, recession_details, RecessionType,
};
use dentara_core::models::tooth::ToothNumber;

#[test]
fn no_interdental_loss_is_rt1_regardless_of_mgj() {
    assert_eq!(classify_recession(false, false), RecessionType::Rt1);
    assert_eq!(classify_recession(false, true), RecessionType::Rt1);
}

#[test]
fn interdental_loss_without_mgj_extension_is_rt2() {
    assert_eq!(classify_recession(true, false), RecessionType::Rt2);
}

#[test]
fn interdental_loss_with_mgj_extension_is_rt3() {
    assert_eq!(classify_recession(true, true), RecessionType::Rt3);
}

#[test]
fn details_echo_tooth_and_classification() {
    let tooth = ToothNumber::try_from(41).unwrap();
    let details = recession_details(tooth, RecessionType::Rt2);
    assert_eq!(details.tooth, tooth);
    assert_eq!(details.classification, RecessionType::Rt2);
    assert!(!details.description.is_empty());
}

#[test]
fn prognosis_degrades_with_classification() {
    let tooth = ToothNumber::try_from(31).unwrap();

    let rt1 = recession_details(tooth, RecessionType::Rt1);
    assert!(rt1.prognosis.contains("Complete root coverage"));

    let rt2 = recession_details(tooth, RecessionType::Rt2);
    assert!(rt2.prognosis.contains("Partial to complete"));

    let rt3 = recession_details(tooth, RecessionType::Rt3);
    assert!(rt3.prognosis.contains("not achievable"));
}

#[test]
fn classification_serializes_as_clinical_label() {
    let json = serde_json::to_string(&RecessionType::Rt3).unwrap();
    assert_eq!(json, "\"RT3\"");
    assert_eq!(RecessionType::Rt3.to_string(), "RT3");
}

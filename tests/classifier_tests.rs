use laureate_chart::ChartError;
use laureate_chart::core::{CategoryGroup, RawRecord, STEM_CATEGORIES, category_group_of, classify};

#[test]
fn stem_categories_classify_as_stem_in_any_case() {
    for category in ["Physics", "CHEMISTRY", "medicine", "EcOnOmIcS"] {
        let record = RawRecord::new(1990, category, "Someone");
        let classified = classify(&record).expect("classify");
        assert_eq!(classified.category_group, CategoryGroup::Stem, "{category}");
        assert_eq!(classified.record, record);
    }
}

#[test]
fn other_categories_classify_as_non_stem() {
    for category in ["Literature", "peace", "Mathematics", "physics and chemistry"] {
        assert_eq!(category_group_of(category), CategoryGroup::NonStem, "{category}");
    }
}

#[test]
fn padded_category_is_not_trimmed_before_membership_test() {
    assert_eq!(category_group_of(" physics"), CategoryGroup::NonStem);
}

#[test]
fn blank_category_is_a_validation_error() {
    let record = RawRecord::new(2001, "   ", "Nobody");
    let err = classify(&record).expect_err("blank category must fail");
    assert!(matches!(
        err,
        ChartError::Validation {
            field: "category",
            ..
        }
    ));
}

#[test]
fn classification_depends_only_on_category() {
    let a = RawRecord::new(1901, "Chemistry", "A");
    let b = RawRecord::new(2020, "Chemistry", "B");
    assert_eq!(
        classify(&a).expect("classify a").category_group,
        classify(&b).expect("classify b").category_group
    );
}

#[test]
fn stem_set_is_lower_case() {
    for category in STEM_CATEGORIES {
        assert_eq!(category, category.to_lowercase());
    }
}

#[test]
fn group_labels_match_display() {
    assert_eq!(CategoryGroup::Stem.to_string(), "STEM");
    assert_eq!(CategoryGroup::NonStem.to_string(), "Non-STEM");
}

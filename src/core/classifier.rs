use crate::core::{CategoryGroup, ClassifiedRecord, RawRecord};
use crate::error::{ChartError, ChartResult};

/// Prize categories counted as STEM, lower-case.
pub const STEM_CATEGORIES: [&str; 4] = ["physics", "chemistry", "medicine", "economics"];

/// Maps a category name to its group, ignoring case.
#[must_use]
pub fn category_group_of(category: &str) -> CategoryGroup {
    let lowered = category.to_lowercase();
    if STEM_CATEGORIES.contains(&lowered.as_str()) {
        CategoryGroup::Stem
    } else {
        CategoryGroup::NonStem
    }
}

/// Annotates `record` with its category group.
///
/// `row` is only used to locate the record in the error when the category is
/// blank.
pub fn classify_at(row: usize, record: &RawRecord) -> ChartResult<ClassifiedRecord> {
    if record.category.trim().is_empty() {
        return Err(ChartError::validation(row, "category", "must not be blank"));
    }

    Ok(ClassifiedRecord {
        category_group: category_group_of(&record.category),
        record: record.clone(),
    })
}

pub fn classify(record: &RawRecord) -> ChartResult<ClassifiedRecord> {
    classify_at(0, record)
}

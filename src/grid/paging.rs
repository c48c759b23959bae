use crate::models::Photo;

/// Start fetching the next page when this many rows or fewer remain below the last visible one.
pub const PAGINATION_THRESHOLD: usize = 6;

pub fn should_load_more(last_visible: usize, item_count: usize) -> bool {
    item_count > 0 && last_visible + PAGINATION_THRESHOLD >= item_count
}

/// Rows added by an append, if `new` is `old` plus a suffix. `None` means the
/// list was replaced and needs a full reload.
pub fn appended_tail<'a>(old: &[Photo], new: &'a [Photo]) -> Option<&'a [Photo]> {
    new.starts_with(old).then(|| &new[old.len()..])
}

/// Index of `photo` in `list` by identity, for keeping the selection across updates.
pub fn position_of(list: &[Photo], photo: &Photo) -> Option<usize> {
    list.iter().position(|p| p.same_item(photo))
}

//! Pure queries and mutations over a flat, depth-tagged outline.
//!
//! The outline has no parent/child pointers. A subtree is the contiguous run
//! of items after its root whose levels are strictly deeper, and everything
//! here is derived from that by linear scan. Mutations return a fresh
//! sequence; callers commit the result (or discard it) atomically.

use std::ops::Range;

use crate::model::Item;

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Index range of the subtree rooted at `idx`, exclusive of `idx` itself:
/// the maximal contiguous run after `idx` whose levels are all strictly
/// greater than `level[idx]`. Empty when the item has no descendants.
pub fn subtree_range(outline: &[Item], idx: usize) -> Range<usize> {
    let anchor = outline[idx].level;
    let mut end = idx + 1;
    while end < outline.len() && outline[end].level > anchor {
        end += 1;
    }
    idx + 1..end
}

/// Direct children only: subtree members exactly one level deeper than `idx`.
pub fn direct_child_indices(outline: &[Item], idx: usize) -> Vec<usize> {
    let child_level = outline[idx].level + 1;
    subtree_range(outline, idx)
        .filter(|&i| outline[i].level == child_level)
        .collect()
}

/// Nearest preceding item that is shallower than `idx`, or None at top level.
pub fn parent_index(outline: &[Item], idx: usize) -> Option<usize> {
    let level = outline[idx].level;
    (0..idx).rev().find(|&i| outline[i].level < level)
}

/// Follow `parent_index` upward until the chain runs out.
pub fn root_index(outline: &[Item], idx: usize) -> usize {
    let mut current = idx;
    while let Some(parent) = parent_index(outline, current) {
        current = parent;
    }
    current
}

/// Start of the sibling block immediately before `idx`: the nearest
/// preceding item at the same level, provided no shallower item intervenes.
pub fn previous_sibling_index(outline: &[Item], idx: usize) -> Option<usize> {
    let level = outline[idx].level;
    (0..idx)
        .rev()
        .take_while(|&j| outline[j].level >= level)
        .find(|&j| outline[j].level == level)
}

/// Start of the sibling block immediately after `idx`'s subtree, if the item
/// there is at the same level (a shallower item means `idx` is the last
/// sibling under its parent).
pub fn next_sibling_index(outline: &[Item], idx: usize) -> Option<usize> {
    let end = subtree_range(outline, idx).end;
    (end < outline.len() && outline[end].level == outline[idx].level).then_some(end)
}

// ---------------------------------------------------------------------------
// Guards
// ---------------------------------------------------------------------------

/// An item can promote iff it has a parent to promote toward.
pub fn can_promote(outline: &[Item], idx: usize) -> bool {
    parent_index(outline, idx).is_some()
}

/// Anything but the first item can demote (it becomes a child of some
/// preceding item).
pub fn can_demote(_outline: &[Item], idx: usize) -> bool {
    idx > 0
}

/// A block can never be moved onto itself or into its own subtree.
/// `target` is an insertion index into the pre-move outline.
pub fn can_move_to(outline: &[Item], idx: usize, target: usize) -> bool {
    target != idx && !subtree_range(outline, idx).contains(&target)
}

// ---------------------------------------------------------------------------
// Level changes
// ---------------------------------------------------------------------------

/// Level an item would land on when promoted: its parent's level.
/// None when already top-level.
pub fn promote_level(outline: &[Item], idx: usize) -> Option<usize> {
    parent_index(outline, idx).map(|p| outline[p].level)
}

/// Level an item would land on when demoted: one deeper than its
/// predecessor, capped at one step deeper than the item's current level.
/// The cap means a demote descends exactly one level per invocation even
/// when the predecessor sits much deeper. None for the first item.
pub fn demote_level(outline: &[Item], idx: usize) -> Option<usize> {
    if idx == 0 {
        return None;
    }
    let candidate = outline[idx - 1].level + 1;
    Some(candidate.min(outline[idx].level + 1))
}

/// Re-indent `idx` to `new_level`, shifting its whole subtree by the same
/// amount so relative depths inside the subtree are preserved.
///
/// The caller picks a `new_level` that keeps the outline well-formed; use
/// `promote_level` / `demote_level` for targets that are always safe.
pub fn adjust_level(outline: &[Item], idx: usize, new_level: usize) -> Vec<Item> {
    let old_level = outline[idx].level;
    let mut result = outline.to_vec();
    result[idx].level = new_level;
    for i in subtree_range(outline, idx) {
        // Subtree members are strictly deeper than old_level, so the
        // subtraction cannot underflow.
        result[i].level = result[i].level - old_level + new_level;
    }
    result
}

// ---------------------------------------------------------------------------
// Structure changes
// ---------------------------------------------------------------------------

/// Relocate the block `{idx} ∪ subtree(idx)` so it is inserted at `target`,
/// an index into the pre-move outline. Levels are untouched. The caller must
/// check `can_move_to` first.
pub fn move_block(outline: &[Item], idx: usize, target: usize) -> Vec<Item> {
    let end = subtree_range(outline, idx).end;
    let mut result = outline.to_vec();
    let block: Vec<Item> = result.drain(idx..end).collect();
    // Insertion points past the removed block shift left by its length.
    let insert_at = if target > idx { target - block.len() } else { target };
    let insert_at = insert_at.min(result.len());
    result.splice(insert_at..insert_at, block);
    result
}

/// Remove `idx` and its entire subtree in one step.
pub fn delete_subtree(outline: &[Item], idx: usize) -> Vec<Item> {
    let end = subtree_range(outline, idx).end;
    let mut result = outline.to_vec();
    result.drain(idx..end);
    result
}

/// Set `idx` to `completed`, force the whole subtree to match, then re-derive
/// each ancestor from its direct children. A parent is complete iff all of
/// its direct children are complete; the walk stops at the first ancestor
/// whose stored flag already agrees, since nothing above it can change.
pub fn set_completed_with_sync(outline: &[Item], idx: usize, completed: bool) -> Vec<Item> {
    let mut result = outline.to_vec();
    result[idx].completed = completed;
    for i in subtree_range(outline, idx) {
        result[i].completed = completed;
    }

    let mut current = idx;
    while let Some(parent) = parent_index(&result, current) {
        let all_done = direct_child_indices(&result, parent)
            .iter()
            .all(|&c| result[c].completed);
        if result[parent].completed == all_done {
            break;
        }
        result[parent].completed = all_done;
        current = parent;
    }
    result
}

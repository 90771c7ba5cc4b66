//! Moving between the logical code and the box contents.

use crate::admission::{split_chars, Admission};
use crate::code_box::{write_box, CodeBox};
use crate::registry::BoxSlot;

/// Distribute `code` across `slots`.
///
/// An absent or empty code clears every box. Otherwise the whole code is
/// checked first: if any character is inadmissible every box is cleared,
/// never a partial fill. Character `i` goes to box `i`; boxes past the end
/// of the code are cleared and characters past the last box are dropped.
///
/// Returns `false` when the code was rejected.
pub fn project<B: CodeBox>(slots: &mut [BoxSlot<B>], code: Option<&str>, admission: Admission) -> bool {
    project_from(slots, 0, code, admission)
}

/// Like [`project`], but only boxes from `start` onwards are written.
///
/// Character `i` of the code still belongs to box `i`, so newly appended
/// boxes pick up their part of a code that was longer than the old length.
pub fn project_from<B: CodeBox>(
    slots: &mut [BoxSlot<B>],
    start: usize,
    code: Option<&str>,
    admission: Admission,
) -> bool {
    let chars = code.map(split_chars).unwrap_or_default();
    let accepted = chars.iter().all(|&c| admission.admits_char(c));
    if !accepted {
        log::debug!("rejected code projection: inadmissible character");
    }

    for (index, slot) in slots.iter_mut().enumerate().skip(start) {
        let value = chars.get(index).filter(|_| accepted).map(char::to_string);
        write_box(&mut slot.handle, value.as_deref());
    }
    accepted
}

/// Concatenate every non-empty box value in order.
///
/// Gaps are skipped, so boxes `["1", "", "3", ""]` read as `"13"`.
pub fn read<B: CodeBox>(slots: &[BoxSlot<B>]) -> String {
    slots
        .iter()
        .map(|slot| slot.handle.value())
        .filter(|value| !value.is_empty())
        .collect()
}

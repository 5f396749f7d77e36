//! Generic traversal utilities over the step tree.
//!
//! All editor mutations funnel through these helpers so the recursive
//! find/replace-by-id logic exists exactly once.

use super::{Step, StepBody, StepId};

/// Finds a step by id anywhere in the tree.
pub fn find(steps: &[Step], id: StepId) -> Option<&Step> {
    for step in steps {
        if step.id == id {
            return Some(step);
        }
        if let StepBody::Group { children, .. } = &step.body {
            if let Some(found) = find(children, id) {
                return Some(found);
            }
        }
    }
    None
}

/// Applies `f` to the step with the given id, wherever it occurs.
/// Returns `false` without touching the tree when the id is unknown.
pub fn update<F>(steps: &mut [Step], id: StepId, f: F) -> bool
where
    F: FnOnce(&mut Step),
{
    let mut f = Some(f);
    update_inner(steps, id, &mut f)
}

fn update_inner<F>(steps: &mut [Step], id: StepId, f: &mut Option<F>) -> bool
where
    F: FnOnce(&mut Step),
{
    for step in steps {
        if step.id == id {
            if let Some(apply) = f.take() {
                apply(step);
            }
            return true;
        }
        if let StepBody::Group { children, .. } = &mut step.body {
            if update_inner(children, id, f) {
                return true;
            }
        }
    }
    false
}

/// Removes the step with the given id from the tree. Removing a group
/// drops its entire child sequence with it. Returns `false` when the id
/// is unknown.
pub fn remove(steps: &mut Vec<Step>, id: StepId) -> bool {
    if let Some(pos) = steps.iter().position(|s| s.id == id) {
        steps.remove(pos);
        return true;
    }
    for step in steps.iter_mut() {
        if let StepBody::Group { children, .. } = &mut step.body {
            if remove(children, id) {
                return true;
            }
        }
    }
    false
}

/// Visits every step in pre-order (a group before its children), passing
/// the nesting depth starting at 0 for top-level steps.
pub fn for_each<F>(steps: &[Step], f: &mut F)
where
    F: FnMut(&Step, usize),
{
    walk(steps, 0, f);
}

fn walk<F>(steps: &[Step], depth: usize, f: &mut F)
where
    F: FnMut(&Step, usize),
{
    for step in steps {
        f(step, depth);
        if let StepBody::Group { children, .. } = &step.body {
            walk(children, depth + 1, f);
        }
    }
}

/// Assigns contiguous 1-based display numbers to every step in pre-order,
/// groups counted once and their children right after.
pub fn renumber(steps: &mut [Step]) {
    let mut next = 1;
    renumber_inner(steps, &mut next);
}

fn renumber_inner(steps: &mut [Step], next: &mut u32) {
    for step in steps {
        step.number = *next;
        *next += 1;
        if let StepBody::Group { children, .. } = &mut step.body {
            renumber_inner(children, next);
        }
    }
}

/// Total number of steps in the tree, groups included.
pub fn count(steps: &[Step]) -> u32 {
    let mut total = 0;
    for_each(steps, &mut |_, _| total += 1);
    total
}

/// Flattens the tree in pre-order, inlining group children and discarding
/// the group boundaries themselves. Only instruction steps survive.
pub fn flatten(steps: &[Step]) -> Vec<&Step> {
    let mut flat = Vec::new();
    flatten_inner(steps, &mut flat);
    flat
}

fn flatten_inner<'a>(steps: &'a [Step], flat: &mut Vec<&'a Step>) {
    for step in steps {
        match &step.body {
            StepBody::Instruction { .. } => flat.push(step),
            StepBody::Group { children, .. } => flatten_inner(children, flat),
        }
    }
}

use clippath::{Anchor, Contour, Editor, HistoryLog, Preset};

fn tri(x: f32) -> Contour {
    Contour::new(vec![Anchor::corner(x, 0.0), Anchor::corner(100.0, 100.0), Anchor::corner(0.0, 100.0)]).unwrap()
}

#[test]
fn undo_and_redo_walk_the_log() {
    let mut h = HistoryLog::new(tri(0.0), 100);
    assert!(!h.can_undo() && !h.can_redo());
    assert!(h.undo().is_none());
    h.commit(tri(1.0));
    h.commit(tri(2.0));
    assert_eq!(h.current_index(), 2);
    assert_eq!(h.undo(), Some(&tri(1.0)));
    assert_eq!(h.undo(), Some(&tri(0.0)));
    assert!(h.undo().is_none());
    assert_eq!(h.current_index(), 0);
    assert_eq!(h.redo(), Some(&tri(1.0)));
    assert!(h.can_redo());
}

#[test]
fn new_commit_discards_the_redo_branch() {
    let mut h = HistoryLog::new(tri(0.0), 100);
    h.commit(tri(1.0));
    h.commit(tri(2.0));
    h.undo();
    h.undo();
    h.commit(tri(9.0));
    assert!(!h.can_redo());
    assert_eq!(h.len(), 2);
    assert_eq!(h.current(), &tri(9.0));
    assert_eq!(h.undo(), Some(&tri(0.0)));
}

#[test]
fn limit_drops_the_oldest_snapshots() {
    let mut h = HistoryLog::new(tri(0.0), 3);
    for i in 1..=5 {
        h.commit(tri(i as f32));
    }
    assert_eq!(h.len(), 3);
    assert_eq!(h.current_index(), 2);
    assert_eq!(h.current(), &tri(5.0));
    h.undo();
    assert_eq!(h.undo(), Some(&tri(3.0)));
    assert!(h.undo().is_none());
}

#[test]
fn editor_undo_restores_the_exact_prior_contour() {
    let mut ed = Editor::new();
    let before = ed.contour().clone();
    ed.toggle_curve(1);
    let after = ed.contour().clone();
    assert_ne!(before, after);
    ed.undo();
    assert_eq!(ed.contour(), &before);
    ed.redo();
    assert_eq!(ed.contour(), &after);
    // Boundaries are no-ops
    assert!(!ed.redo().changed());
    ed.undo();
    assert!(!ed.undo().changed());
    assert_eq!(ed.contour(), &before);
}

#[test]
fn undo_after_preset_then_edit_branches_correctly() {
    let mut ed = Editor::new();
    ed.load_preset(Preset::Hexagon);
    ed.add_point();
    ed.undo();
    assert_eq!(ed.contour().len(), 6);
    ed.remove_point();
    assert!(!ed.can_redo());
    assert_eq!(ed.contour().len(), 5);
}

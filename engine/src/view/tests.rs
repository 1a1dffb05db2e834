use std::sync::Arc;
use std::time::Duration;

use chrono::{Local, TimeDelta, TimeZone};

use folio_types::ui::{LayoutMode, UiOptions, Viewport};
use folio_types::{Profile, ProjectCatalog, ProjectId, ProjectRecord};

use super::{PREVIEW_ENTRY_DURATION, PortfolioView, ViewError};
use crate::assets::{Portfolio, embedded_portfolio};
use crate::backdrop::Backdrop;
use crate::conversation::{MessageBody, Sender};

fn profile() -> Profile {
    Profile {
        name: "Test".into(),
        surname: None,
        role: "Tester".into(),
        status: "Active now".into(),
        links: Vec::new(),
    }
}

fn view_with(records: Vec<ProjectRecord>, options: UiOptions) -> PortfolioView {
    let catalog = ProjectCatalog::new(records).unwrap();
    let portfolio = Arc::new(Portfolio::new(profile(), catalog));
    let now = Local.with_ymd_and_hms(2024, 3, 1, 14, 5, 0).unwrap();
    PortfolioView::new(portfolio, now, Viewport::new(120, 40), options)
}

fn embedded_view() -> PortfolioView {
    let portfolio = Arc::new(embedded_portfolio().unwrap());
    PortfolioView::new(
        portfolio,
        Local::now(),
        Viewport::new(120, 40),
        UiOptions::default(),
    )
}

fn project_one() -> ProjectRecord {
    ProjectRecord::new(ProjectId::new(1), "Project One", "D1", "2024", "img1").with_company("Apple")
}

#[test]
fn starts_with_nothing_selected() {
    let view = embedded_view();
    assert!(view.selected_project().is_none());
    assert!(!view.preview_visible());
    assert!(view.conversation().is_none());
    assert!(matches!(view.backdrop(), Backdrop::Gradient { .. }));
}

#[test]
fn enter_then_leave_always_clears() {
    let mut view = embedded_view();
    let ids: Vec<_> = view.catalog().iter().map(ProjectRecord::id).collect();

    for repeats in 1..=3 {
        for &id in &ids {
            for _ in 0..repeats {
                view.on_hover_enter(id).unwrap();
            }
            assert!(view.is_selected(id));
            view.on_hover_leave();
            assert!(view.selected_project().is_none());
            view.on_hover_leave();
            assert!(view.selected_project().is_none());
        }
    }
}

#[test]
fn hover_enter_is_idempotent() {
    let mut view = embedded_view();
    view.on_hover_enter(ProjectId::new(2)).unwrap();
    view.on_hover_enter(ProjectId::new(2)).unwrap();
    assert_eq!(
        view.selected_project().map(ProjectRecord::id),
        Some(ProjectId::new(2))
    );
}

#[test]
fn visibility_tracks_selection_for_every_entry() {
    let mut view = embedded_view();
    let ids: Vec<_> = view.catalog().iter().map(ProjectRecord::id).collect();
    for id in ids {
        view.on_hover_enter(id).unwrap();
        assert!(view.preview_visible());
        assert!(view.conversation().is_some());
        assert_eq!(view.backdrop(), Backdrop::Neutral);

        view.on_hover_leave();
        assert!(!view.preview_visible());
        assert!(view.conversation().is_none());
        assert_ne!(view.backdrop(), Backdrop::Neutral);
    }
}

#[test]
fn unknown_project_is_rejected_without_state_change() {
    let mut view = embedded_view();
    view.on_hover_enter(ProjectId::new(1)).unwrap();
    let err = view.on_hover_enter(ProjectId::new(99)).unwrap_err();
    assert_eq!(err, ViewError::UnknownProject(ProjectId::new(99)));
    assert!(view.is_selected(ProjectId::new(1)));
}

#[test]
fn empty_catalog_never_previews() {
    let mut view = view_with(Vec::new(), UiOptions::default());
    view.hover_next();
    view.hover_previous();
    assert!(view.on_pointer_moved(None).is_ok());
    assert!(!view.preview_visible());
}

#[test]
fn pointer_moves_between_rows() {
    let mut view = embedded_view();
    view.on_pointer_moved(Some(ProjectId::new(1))).unwrap();
    assert!(view.is_selected(ProjectId::new(1)));

    view.on_pointer_moved(Some(ProjectId::new(3))).unwrap();
    assert!(view.is_selected(ProjectId::new(3)));

    view.on_pointer_moved(None).unwrap();
    assert!(!view.preview_visible());
}

#[test]
fn leave_wins_over_earlier_enter() {
    let mut view = embedded_view();
    view.on_hover_enter(ProjectId::new(2)).unwrap();
    view.on_hover_enter(ProjectId::new(2)).unwrap();
    view.on_hover_leave();
    assert!(!view.preview_visible());
}

#[test]
fn keyboard_hover_clamps_at_ends() {
    let mut view = embedded_view();
    view.hover_previous();
    assert!(view.is_selected(ProjectId::new(3)));
    view.hover_next();
    assert!(view.is_selected(ProjectId::new(3)));
    view.hover_previous();
    view.hover_previous();
    view.hover_previous();
    assert!(view.is_selected(ProjectId::new(1)));

    view.on_hover_leave();
    view.hover_next();
    assert!(view.is_selected(ProjectId::new(1)));
}

#[test]
fn keyboard_hover_forgets_pointer() {
    let mut view = embedded_view();
    view.set_pointer(Some((3, 8)));
    view.on_pointer_moved(Some(ProjectId::new(1))).unwrap();
    assert_eq!(view.pointer(), Some((3, 8)));

    view.hover_next();
    assert_eq!(view.pointer(), None);
    assert!(view.is_selected(ProjectId::new(2)));

    view.set_pointer(Some((3, 10)));
    view.hover_previous();
    assert_eq!(view.pointer(), None);
}

#[test]
fn single_project_scenario() {
    let mut view = view_with(vec![project_one()], UiOptions::default());
    view.on_hover_enter(ProjectId::new(1)).unwrap();

    let messages = view.conversation().expect("preview visible");
    let texts: Vec<_> = messages.iter().filter_map(|m| m.text()).collect();
    assert_eq!(texts[0], "Hey! Check out my latest project: Project One");
    assert!(messages.iter().any(|m| matches!(
        &m.body,
        MessageBody::Image { uri, .. } if uri == "img1"
    )));
    assert!(texts.contains(&"D1"));
    assert!(texts.iter().any(|t| t.contains("2024")));
    assert_eq!(*texts.last().unwrap(), "I worked on this at Apple");
    assert!(!texts.iter().any(|t| t.contains("collaborated")));
    assert_eq!(
        messages.iter().filter(|m| m.sender == Sender::Sent).count(),
        1
    );

    view.on_hover_leave();
    assert!(view.conversation().is_none());
}

#[test]
fn clock_ticks_move_forward() {
    let mut view = view_with(vec![project_one()], UiOptions::default());
    let start = view.current_time();
    assert_eq!(view.clock_label(), "2:05 PM");

    let mut previous = start;
    for second in 1..=90 {
        let now = start + TimeDelta::seconds(second);
        view.on_clock_tick(now);
        assert!(view.current_time() > previous);
        previous = view.current_time();
    }
    assert_eq!(view.clock_label(), "2:06 PM");
}

#[test]
fn clock_is_independent_of_selection() {
    let mut view = view_with(vec![project_one()], UiOptions::default());
    view.on_hover_enter(ProjectId::new(1)).unwrap();
    let later = view.current_time() + TimeDelta::minutes(3);
    view.on_clock_tick(later);
    assert!(view.is_selected(ProjectId::new(1)));
    assert_eq!(view.current_time(), later);
}

#[test]
fn entry_effect_runs_once_per_appearance() {
    let mut view = embedded_view();
    view.on_hover_enter(ProjectId::new(1)).unwrap();
    assert!(view.preview_effect().is_some());

    view.advance(PREVIEW_ENTRY_DURATION + Duration::from_millis(1));
    assert!(view.preview_effect().is_none());

    // Switching rows while visible does not replay it.
    view.on_hover_enter(ProjectId::new(2)).unwrap();
    assert!(view.preview_effect().is_none());

    view.on_hover_leave();
    view.on_hover_enter(ProjectId::new(2)).unwrap();
    assert!(view.preview_effect().is_some());
}

#[test]
fn reduced_motion_skips_effects() {
    let options = UiOptions {
        reduced_motion: true,
        ..UiOptions::default()
    };
    let mut view = view_with(vec![project_one()], options);
    view.advance(Duration::from_secs(4));
    assert_eq!(view.backdrop(), Backdrop::Gradient { phase: 0.0 });

    view.on_hover_enter(ProjectId::new(1)).unwrap();
    assert!(view.preview_effect().is_none());
}

#[test]
fn resize_switches_layout_mode() {
    let mut view = embedded_view();
    assert_eq!(view.layout_mode(), LayoutMode::Wide);
    view.on_resize(Viewport::new(60, 30));
    assert_eq!(view.layout_mode(), LayoutMode::Compact);
    view.on_resize(Viewport::new(140, 30));
    assert_eq!(view.layout_mode(), LayoutMode::Wide);
}

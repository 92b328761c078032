//! Integration tests for the create/edit form workflow.

use assert_matches::assert_matches;
use gympro_console::form::{EntityForm, FormMode, FormPhase};
use gympro_core::error::CoreError;
use gympro_store::models::Member;
use gympro_store::models::status::MemberStatus;
use gympro_store::{EntityStore, fixtures};
use serde_json::json;

// ---------------------------------------------------------------------------
// Create flow
// ---------------------------------------------------------------------------

#[test]
fn create_flow_drafts_then_commits() {
    let mut store: EntityStore<Member> = EntityStore::seed(fixtures::members());
    let mut form: EntityForm<Member> = EntityForm::new();

    form.open_create();
    assert_eq!(form.phase(), FormPhase::Drafting(FormMode::Create));
    // Defaults are pre-filled for the modal to render.
    assert_eq!(form.field("status"), Some(&json!("active")));
    assert_eq!(form.field("totalVisits"), Some(&json!(0)));

    form.set_field("name", json!("New Member"));
    form.set_field("email", json!("new.member@email.com"));
    form.set_field("phone", json!("+1 (555) 777-8888"));
    form.set_field("joinDate", json!("2024-03-22"));
    form.set_field("lastVisit", json!("2024-03-22"));

    let created = form.submit(&mut store).expect("submit");
    assert_eq!(created.id, 6);
    assert_eq!(created.status, MemberStatus::Active);
    assert_eq!(created.total_visits, 0);
    assert_eq!(form.phase(), FormPhase::Idle);
    assert_eq!(store.len(), 6);
}

#[test]
fn cancel_leaves_the_store_untouched() {
    let mut store: EntityStore<Member> = EntityStore::seed(fixtures::members());
    let mut form: EntityForm<Member> = EntityForm::new();

    form.open_create();
    form.set_field("name", json!("Abandoned Draft"));
    form.cancel();

    assert_eq!(form.phase(), FormPhase::Idle);
    assert_eq!(store.len(), 5);
    // The draft is gone; reopening starts from defaults again.
    form.open_create();
    assert_eq!(form.field("name"), None);
}

#[test]
fn validation_failure_returns_to_drafting_with_draft_intact() {
    let mut store: EntityStore<Member> = EntityStore::new();
    let mut form: EntityForm<Member> = EntityForm::new();

    form.open_create();
    form.set_field("name", json!("New Member"));
    form.set_field("email", json!("not-an-email"));

    let err = form.submit(&mut store).expect_err("invalid email");
    let failure = assert_matches!(err, CoreError::Validation(f) => f);
    assert!(failure.violations.iter().any(|v| v.field == "email"));

    // Still drafting, edits preserved, store untouched.
    assert_eq!(form.phase(), FormPhase::Drafting(FormMode::Create));
    assert_eq!(form.field("name"), Some(&json!("New Member")));
    assert!(store.is_empty());

    // Correcting the field lets the same draft through.
    form.set_field("email", json!("new.member@email.com"));
    form.set_field("phone", json!("+1 (555) 777-8888"));
    form.set_field("joinDate", json!("2024-03-22"));
    form.set_field("lastVisit", json!("2024-03-22"));
    let created = form.submit(&mut store).expect("resubmit");
    assert_eq!(created.id, 1);
}

// ---------------------------------------------------------------------------
// Edit flow
// ---------------------------------------------------------------------------

#[test]
fn edit_flow_patches_the_selected_record() {
    let mut store: EntityStore<Member> = EntityStore::seed(fixtures::members());
    let mut form: EntityForm<Member> = EntityForm::new();

    let jane = store.get(2).expect("fixture").clone();
    form.open_edit(&jane).expect("open edit");
    assert_eq!(form.phase(), FormPhase::Drafting(FormMode::Edit(2)));
    assert_eq!(form.field("name"), Some(&json!("Jane Smith")));

    form.set_field("phone", json!("+1 (555) 999-9999"));

    let updated = form.submit(&mut store).expect("submit");
    assert_eq!(updated.id, 2);
    assert_eq!(updated.phone, "+1 (555) 999-9999");
    assert_eq!(updated.name, "Jane Smith");
}

#[test]
fn edit_draft_does_not_leak_before_submit() {
    let mut store: EntityStore<Member> = EntityStore::seed(fixtures::members());
    let mut form: EntityForm<Member> = EntityForm::new();

    let jane = store.get(2).expect("fixture").clone();
    form.open_edit(&jane).expect("open edit");
    form.set_field("name", json!("Renamed"));

    // The store still holds the original until submit.
    assert_eq!(store.get(2).map(|m| m.name.as_str()), Some("Jane Smith"));

    form.cancel();
    assert_eq!(store.get(2).map(|m| m.name.as_str()), Some("Jane Smith"));
}

#[test]
fn set_field_is_ignored_while_idle() {
    let mut form: EntityForm<Member> = EntityForm::new();
    form.set_field("name", json!("Ghost"));
    assert_eq!(form.field("name"), None);
}

#[test]
fn submit_while_idle_is_an_internal_error() {
    let mut store: EntityStore<Member> = EntityStore::new();
    let mut form: EntityForm<Member> = EntityForm::new();
    let err = form.submit(&mut store).expect_err("nothing to submit");
    assert_matches!(err, CoreError::Internal(_));
}

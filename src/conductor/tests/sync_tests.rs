use std::rc::Rc;
use std::time::Duration;

use super::fixtures::{bare_page, host_with, page_with_bar, FakeContainer, FakeItem, TestScheduler};
use crate::conductor::container::ContainerKind;
use crate::conductor::error::ConductorError;
use crate::conductor::sync::{BarConductor, ConductorOptions, DEFAULT_WAIT_THRESHOLD};
use crate::core::bar::{BarDefinition, BarPayload, HostBarSlot};
use crate::core::tree::{Element, ViewNode};
use crate::core::types::BarButton;

const WAIT: Duration = Duration::from_millis(800);

fn attach(
    container: &Rc<FakeContainer>,
) -> (BarConductor, Rc<HostBarSlot>, Rc<TestScheduler>) {
    let slot = HostBarSlot::new();
    let scheduler = TestScheduler::new();
    let host = host_with(container.clone());
    let conductor = BarConductor::attach_with(
        &host,
        slot.clone(),
        ConductorOptions {
            wait_threshold: WAIT,
            scheduler: scheduler.clone(),
        },
    )
    .expect("host contains a container");
    (conductor, slot, scheduler)
}

fn holds(slot: &HostBarSlot, payload: &Rc<BarPayload>) -> bool {
    slot.current().is_some_and(|p| Rc::ptr_eq(&p, payload))
}

#[test]
fn test_attach_fails_without_container() {
    let host: Rc<dyn ViewNode> = Element::new();
    let result = BarConductor::attach(&host, HostBarSlot::new());
    assert!(matches!(result, Err(ConductorError::MissingSelector)));
}

#[test]
fn test_default_options() {
    let options = ConductorOptions::default();
    assert_eq!(options.wait_threshold, DEFAULT_WAIT_THRESHOLD);

    let container = FakeContainer::new(ContainerKind::Tabbed);
    let (page, _) = page_with_bar();
    container.add_item(FakeItem::with_view(page));
    let conductor = BarConductor::attach(&host_with(container), HostBarSlot::new())
        .expect("host contains a container");
    assert_eq!(conductor.wait_threshold(), DEFAULT_WAIT_THRESHOLD);
}

#[test]
fn test_tabbed_assigns_bar_of_loaded_item() {
    let container = FakeContainer::new(ContainerKind::Tabbed);
    let (page, bar) = page_with_bar();
    container.add_item(FakeItem::with_view(page));
    container.add_item(FakeItem::with_view(bare_page()));

    let (_conductor, slot, scheduler) = attach(&container);

    container.load(0);
    assert!(holds(&slot, &bar.payload()));
    assert_eq!(
        scheduler.pending_count(),
        0,
        "tabbed assignment is synchronous"
    );
}

#[test]
fn test_tabbed_clears_slot_when_no_visible_bar() {
    let container = FakeContainer::new(ContainerKind::Tabbed);
    let (page, _) = page_with_bar();
    container.add_item(FakeItem::with_view(page));
    container.add_item(FakeItem::with_view(bare_page()));

    let (_conductor, slot, _) = attach(&container);

    container.load(0);
    assert!(!slot.is_empty());

    container.load(1);
    assert!(slot.is_empty(), "tab with no bar empties the slot");
}

#[test]
fn test_tabbed_hidden_bar_counts_as_absent() {
    let container = FakeContainer::new(ContainerKind::Tabbed);
    let (page, bar) = page_with_bar();
    bar.set_visible(false);
    container.add_item(FakeItem::with_view(page));

    let (_conductor, slot, _) = attach(&container);

    container.load(0);
    assert!(slot.is_empty(), "an invisible bar must not be displayed");
}

#[test]
fn test_hot_swap_between_two_bars_in_one_view() {
    // One view, two definitions; the last visible in document order wins.
    let page = Element::new();
    let first = BarDefinition::new();
    let second = BarDefinition::new();
    second.set_visible(false);
    let holder_a = Element::new();
    holder_a.set_bar(first.clone());
    let holder_b = Element::new();
    holder_b.set_bar(second.clone());
    page.add_child(holder_a);
    page.add_child(holder_b);

    let container = FakeContainer::new(ContainerKind::Tabbed);
    container.add_item(FakeItem::with_view(page));

    let (_conductor, slot, _) = attach(&container);

    container.load(0);
    assert!(holds(&slot, &first.payload()));

    first.set_visible(false);
    second.set_visible(true);
    container.load(0);
    assert!(holds(&slot, &second.payload()), "swap to the later definition");

    // Both visible: the later one still wins, and resyncing is idempotent.
    first.set_visible(true);
    container.load(0);
    assert!(holds(&slot, &second.payload()));
    container.load(0);
    assert!(holds(&slot, &second.payload()));
}

#[test]
fn test_assignment_refreshes_stale_payload() {
    // Changes made while a bar was off-screen surface when it comes back.
    let container = FakeContainer::new(ContainerKind::Tabbed);
    let (page, bar) = page_with_bar();
    let button = BarButton::new("edit-undo-symbolic", "undo");
    bar.add_button(button.clone());
    container.add_item(FakeItem::with_view(page));
    container.add_item(FakeItem::with_view(bare_page()));

    let (_conductor, slot, _) = attach(&container);
    container.load(1);
    assert!(slot.is_empty());

    button.set_label("redo");
    container.load(0);
    let payload = slot.current().expect("bar assigned");
    assert_eq!(payload.buttons()[0].label, "redo");
}

#[test]
fn test_carousel_defers_assignment_into_empty_slot() {
    let container = FakeContainer::new(ContainerKind::Carousel);
    container.add_item(FakeItem::with_view(bare_page()));
    let (page, bar) = page_with_bar();
    container.add_item(FakeItem::with_view(page));

    let (_conductor, slot, scheduler) = attach(&container);
    scheduler.fire_all(); // settle the attach-time first sync
    assert!(slot.is_empty());

    container.select(1);
    assert!(slot.is_empty(), "assignment waits out the transition");
    assert_eq!(scheduler.pending_count(), 1);
    assert_eq!(scheduler.last_delay(), Some(WAIT));

    scheduler.fire_all();
    assert!(holds(&slot, &bar.payload()));
}

#[test]
fn test_later_event_supersedes_pending_assignment() {
    let container = FakeContainer::new(ContainerKind::Carousel);
    container.add_item(FakeItem::with_view(bare_page()));
    let (page_b, _) = page_with_bar();
    container.add_item(FakeItem::with_view(page_b));
    let (page_c, bar_c) = page_with_bar();
    bar_c.set_visible(false);
    container.add_item(FakeItem::with_view(page_c));

    let (_conductor, slot, scheduler) = attach(&container);
    scheduler.fire_all();

    // Swipe to the bar page, then on to the hidden-bar page before the
    // wait elapses.
    container.select(1);
    container.select(2);

    scheduler.fire_all();
    assert!(
        slot.is_empty(),
        "a superseded deferred assignment must not apply"
    );
}

#[test]
fn test_carousel_assigns_immediately_when_slot_occupied() {
    let container = FakeContainer::new(ContainerKind::Carousel);
    let (page_a, bar_a) = page_with_bar();
    container.add_item(FakeItem::with_view(page_a));
    let (page_b, bar_b) = page_with_bar();
    container.add_item(FakeItem::with_view(page_b));

    let (_conductor, slot, scheduler) = attach(&container);
    scheduler.fire_all();
    assert!(holds(&slot, &bar_a.payload()));

    // Slot already occupied: swapping payloads does not abort the
    // transition, so no wait applies.
    container.select(1);
    assert!(holds(&slot, &bar_b.payload()));
    assert_eq!(scheduler.pending_count(), 0);
}

#[test]
fn test_carousel_clears_payload_in_place() {
    let container = FakeContainer::new(ContainerKind::Carousel);
    let (page, bar) = page_with_bar();
    bar.add_button(BarButton::new("document-save-symbolic", "save"));
    container.add_item(FakeItem::with_view(page));
    container.add_item(FakeItem::with_view(bare_page()));

    let (_conductor, slot, scheduler) = attach(&container);
    scheduler.fire_all();
    assert!(holds(&slot, &bar.payload()));

    container.select(1);
    assert!(
        holds(&slot, &bar.payload()),
        "the slot keeps its payload during a carousel clear"
    );
    assert!(
        bar.payload().buttons().is_empty(),
        "the payload itself is emptied"
    );
}

#[test]
fn test_carousel_abc_swipe_script() {
    // Pages: A has no bar, B has a bar with one button, C's bar is hidden.
    let container = FakeContainer::new(ContainerKind::Carousel);
    container.add_item(FakeItem::with_view(bare_page()));
    let (page_b, bar_b) = page_with_bar();
    bar_b.add_button(BarButton::new("document-save-symbolic", "save"));
    container.add_item(FakeItem::with_view(page_b));
    let (page_c, bar_c) = page_with_bar();
    bar_c.set_visible(false);
    container.add_item(FakeItem::with_view(page_c));

    let (_conductor, slot, scheduler) = attach(&container);
    scheduler.fire_all();
    assert!(slot.is_empty(), "A has nothing to show");

    // A -> B: empty slot, so the assignment is deferred.
    container.select(1);
    scheduler.fire_all();
    assert!(holds(&slot, &bar_b.payload()));
    assert_eq!(bar_b.payload().buttons().len(), 1);

    // B -> C: no visible bar; B's payload is emptied but stays in the slot.
    container.select(2);
    assert!(holds(&slot, &bar_b.payload()));
    assert!(bar_b.payload().buttons().is_empty());

    // C -> B: slot is occupied, so the refreshed payload applies at once.
    container.select(1);
    assert!(holds(&slot, &bar_b.payload()));
    assert_eq!(
        bar_b.payload().buttons().len(),
        1,
        "re-entering the page restores the emptied payload"
    );
    assert_eq!(scheduler.pending_count(), 0);
}

#[test]
fn test_attach_syncs_active_carousel_item() {
    let container = FakeContainer::new(ContainerKind::Carousel);
    let (page, bar) = page_with_bar();
    container.add_item(FakeItem::with_view(page));

    let (_conductor, slot, scheduler) = attach(&container);

    // All carousel bars are deferred, so only the conductor's own first
    // sync can fill the slot.
    assert!(bar.defer_load());
    assert!(slot.is_empty());
    assert_eq!(scheduler.pending_count(), 1);

    scheduler.fire_all();
    assert!(holds(&slot, &bar.payload()));
}

#[test]
fn test_attach_waits_for_active_view_to_materialize() {
    let container = FakeContainer::new(ContainerKind::Carousel);
    let item = FakeItem::unmaterialized();
    container.add_item(item.clone());

    let (_conductor, slot, scheduler) = attach(&container);
    assert_eq!(scheduler.pending_count(), 0, "nothing to sync yet");

    let (page, bar) = page_with_bar();
    item.materialize(page);
    scheduler.fire_all();
    assert!(holds(&slot, &bar.payload()));
}

#[test]
fn test_event_for_unmaterialized_item_is_skipped() {
    let container = FakeContainer::new(ContainerKind::Tabbed);
    let (page, _) = page_with_bar();
    container.add_item(FakeItem::with_view(page));
    container.add_item(FakeItem::unmaterialized());

    let (_conductor, slot, _) = attach(&container);
    container.load(0);
    let before = slot.current();

    // No view, no sync; the slot keeps whatever it had.
    container.load(1);
    assert_eq!(slot.current().is_some(), before.is_some());
}

#[test]
fn test_detach_stops_synchronization() {
    let container = FakeContainer::new(ContainerKind::Tabbed);
    let (page, _) = page_with_bar();
    container.add_item(FakeItem::with_view(page));
    container.add_item(FakeItem::with_view(bare_page()));

    let (conductor, slot, _) = attach(&container);
    container.load(0);
    assert!(!slot.is_empty());

    conductor.detach();
    conductor.detach(); // idempotent

    container.load(1);
    assert!(!slot.is_empty(), "events after detach must not touch the slot");
}

#[test]
fn test_detach_before_active_view_materializes() {
    let container = FakeContainer::new(ContainerKind::Carousel);
    let item = FakeItem::unmaterialized();
    container.add_item(item.clone());
    let (page_b, bar_b) = page_with_bar();
    container.add_item(FakeItem::with_view(page_b));

    let (conductor, slot, scheduler) = attach(&container);
    container.select(1);
    scheduler.fire_all();
    assert!(holds(&slot, &bar_b.payload()));

    conductor.detach();

    // The attach-time one-shot for the active view is still registered;
    // it must not synchronize once the conductor is detached.
    let (page_a, _) = page_with_bar();
    item.materialize(page_a);
    scheduler.fire_all();
    assert!(
        holds(&slot, &bar_b.payload()),
        "a view materializing after detach must not touch the slot"
    );
}

#[test]
fn test_detach_cancels_pending_deferred_assignment() {
    let container = FakeContainer::new(ContainerKind::Carousel);
    container.add_item(FakeItem::with_view(bare_page()));
    let (page, _) = page_with_bar();
    container.add_item(FakeItem::with_view(page));

    let (conductor, slot, scheduler) = attach(&container);
    scheduler.fire_all();

    container.select(1);
    assert_eq!(scheduler.pending_count(), 1);

    conductor.detach();
    scheduler.fire_all();
    assert!(slot.is_empty(), "a pending assignment dies with the conductor");
}

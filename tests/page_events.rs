mod common;

use common::{load, run_frames, StubPage, DESKTOP, PHONE};
use showcase::host::ElementId;
use showcase::{ClickTarget, Key, PageEvent};

fn anchor(href: &str, target_top: Option<f32>) -> PageEvent {
    PageEvent::Click(ClickTarget::Anchor {
        href: href.to_string(),
        target_top,
    })
}

#[test]
fn nav_turns_solid_past_threshold() {
    let host = StubPage::desktop();
    let mut page = load(&host, DESKTOP);
    assert!(!page.nav().unwrap().is_scrolled());

    page.handle(PageEvent::Scroll(50.0), &host);
    assert!(!page.nav().unwrap().is_scrolled());
    page.handle(PageEvent::Scroll(51.0), &host);
    assert!(page.nav().unwrap().is_scrolled());
    page.handle(PageEvent::Scroll(-20.0), &host);
    assert_eq!(page.scroll_y(), 0.0);
    assert!(!page.nav().unwrap().is_scrolled());
}

#[test]
fn anchor_glides_below_the_header() {
    let host = StubPage::desktop();
    let mut page = load(&host, DESKTOP);

    page.handle(anchor("#gallery", Some(1500.0)), &host);
    run_frames(&mut page, &host, 0.0, 320.0);
    let midway = page.scroll_y();
    assert!(midway > 0.0 && midway < 1408.0);

    run_frames(&mut page, &host, 336.0, 700.0);
    assert_eq!(page.scroll_y(), 1500.0 - 72.0 - 20.0);
    assert!(page.nav().unwrap().is_scrolled());
}

#[test]
fn bare_hash_and_missing_targets_are_ignored() {
    let host = StubPage::desktop();
    let mut page = load(&host, DESKTOP);
    page.handle(anchor("#", Some(900.0)), &host);
    page.handle(anchor("#pricing", None), &host);
    run_frames(&mut page, &host, 0.0, 700.0);
    assert_eq!(page.scroll_y(), 0.0);
}

#[test]
fn user_scroll_interrupts_a_glide() {
    let host = StubPage::desktop();
    let mut page = load(&host, DESKTOP);
    page.handle(anchor("#contact", Some(3000.0)), &host);
    run_frames(&mut page, &host, 0.0, 160.0);
    page.handle(PageEvent::Scroll(400.0), &host);
    run_frames(&mut page, &host, 176.0, 1000.0);
    assert_eq!(page.scroll_y(), 400.0);
}

#[test]
fn mobile_menu_open_close_and_scroll_lock() {
    let host = StubPage::desktop();
    let mut page = load(&host, PHONE);

    page.handle(PageEvent::Click(ClickTarget::Element(ElementId::NavToggle)), &host);
    let menu = page.menu().unwrap();
    assert!(menu.is_open());
    assert_eq!(menu.aria_expanded(), "true");
    assert!(page.scroll_locked());

    page.handle(PageEvent::Scroll(300.0), &host);
    assert_eq!(page.scroll_y(), 0.0);

    page.handle(PageEvent::Key(Key::Escape), &host);
    assert!(!page.menu().unwrap().is_open());
    assert!(!page.scroll_locked());

    page.handle(PageEvent::Click(ClickTarget::Element(ElementId::NavToggle)), &host);
    page.handle(PageEvent::Click(ClickTarget::Element(ElementId::MobileBackdrop)), &host);
    assert!(!page.menu().unwrap().is_open());
}

#[test]
fn mobile_link_closes_menu_then_scrolls() {
    let host = StubPage::desktop();
    let mut page = load(&host, PHONE);
    page.handle(PageEvent::Click(ClickTarget::Element(ElementId::NavToggle)), &host);
    page.handle(
        PageEvent::Click(ClickTarget::MobileLink {
            href: "#about".to_string(),
            target_top: Some(700.0),
        }),
        &host,
    );
    assert!(!page.menu().unwrap().is_open());
    run_frames(&mut page, &host, 0.0, 700.0);
    assert_eq!(page.scroll_y(), 608.0);
}

#[test]
fn arrow_keys_drive_the_hero() {
    let host = StubPage::desktop();
    let mut page = load(&host, DESKTOP);
    page.handle(PageEvent::Key(Key::ArrowLeft), &host);
    assert_eq!(page.hero().unwrap().current_index(), 2);
    page.handle(PageEvent::Key(Key::ArrowRight), &host);
    page.handle(PageEvent::Key(Key::ArrowRight), &host);
    assert_eq!(page.hero().unwrap().current_index(), 1);
}

#[test]
fn reveal_staggers_a_batch() {
    let host = StubPage::desktop();
    let mut page = load(&host, DESKTOP);
    page.handle(PageEvent::Intersections(vec![true, true, false, false]), &host);

    page.handle(PageEvent::Frame { now: 0.0, dt: 0.0 }, &host);
    assert!(page.reveal().is_visible(0));
    assert!(!page.reveal().is_visible(1));
    page.handle(PageEvent::Frame { now: 100.0, dt: 0.1 }, &host);
    assert!(page.reveal().is_visible(1));
    assert!(!page.reveal().is_visible(2));

    page.handle(PageEvent::Intersections(vec![false, false, true, false]), &host);
    run_frames(&mut page, &host, 116.0, 400.0);
    assert!(page.reveal().is_visible(0));
    assert!(page.reveal().is_visible(2));
    assert!(!page.reveal().is_visible(3));
}

//! The raylib layout as the page's host, without opening a window.

use showcase::config::PageConfig;
use showcase::host::{ElementId, Host};
use showcase::render::PageLayout;
use showcase::viewport::Viewport;
use showcase::{ClickTarget, Page, PageEvent};

fn page_for(layout: &PageLayout) -> Page {
    let mut page = Page::load(layout, &PageConfig::default(), layout.viewport(), &layout.reveal_specs(), 0.0);
    page.set_max_scroll(layout.max_scroll());
    page
}

#[test]
fn every_widget_attaches_against_the_layout() {
    let layout = PageLayout::new(Viewport::new(1280.0, 800.0));
    assert!(ElementId::ALL.iter().all(|id| layout.has_element(*id)));
    let page = page_for(&layout);
    assert!(page.hero().is_some());
    assert!(page.gallery().is_some());
    assert!(page.testimonials().is_some());
    assert!(page.nav().is_some());
    assert!(page.menu().is_some());
    assert!(page.hero().unwrap().progress().is_some());
    assert_eq!(page.reveal().len(), layout.reveal_targets().len());
}

#[test]
fn hit_test_drives_the_gallery() {
    let layout = PageLayout::new(Viewport::new(1280.0, 800.0));
    let mut page = page_for(&layout);

    let next = layout.gallery.next;
    let scroll = layout.gallery.section.y;
    page.handle(PageEvent::Scroll(scroll), &layout);
    let point = raylib::prelude::Vector2::new(next.x + 4.0, next.y - page.scroll_y() + 4.0);
    let target = layout.hit_test(point, page.scroll_y(), false);
    assert_eq!(target, Some(ClickTarget::Element(ElementId::GalleryNext)));

    page.handle(PageEvent::Click(target.unwrap()), &layout);
    let gallery = page.gallery().unwrap();
    assert_eq!(gallery.current_index(), 1);
    assert_eq!(gallery.view().offset, layout.gallery.card_width + 24.0);
}

#[test]
fn nav_link_scrolls_to_its_section() {
    let layout = PageLayout::new(Viewport::new(1280.0, 800.0));
    let mut page = page_for(&layout);
    let link = layout.nav_links[2];
    let target = layout
        .hit_test(raylib::prelude::Vector2::new(link.x + 10.0, 30.0), 0.0, false)
        .unwrap();
    page.handle(PageEvent::Click(target), &layout);

    let mut now = 0.0;
    while now < 1000.0 {
        page.handle(PageEvent::Frame { now, dt: 0.016 }, &layout);
        now += 16.0;
    }
    let expected = (layout.testimonials.section.y - 72.0 - 20.0).min(layout.max_scroll());
    assert!((page.scroll_y() - expected).abs() < 0.5);
}

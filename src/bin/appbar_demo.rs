// Copyright 2026 the bindable-appbar contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Demo application
//!
//! Three pages in a carousel (or a plain notebook with `--tabbed`):
//! - "first" declares two bars and hot-swaps between them
//! - "second" declares one bar whose visibility can be toggled
//! - "third" declares no bar at all
//!
//! Watch the bar strip at the bottom track the active page; with the
//! carousel, note the assignment waiting out the slide animation.

use std::rc::Rc;
use std::time::Duration;

use clap::Parser;
use gtk4::prelude::*;
use gtk4::Orientation;
use tracing::info;

use bindable_appbar::conductor::{ConductorOptions, ItemContainer};
use bindable_appbar::core::tree::{Element, ViewNode};
use bindable_appbar::ui::{BarWidget, BoundPage, GlibScheduler, NotebookContainer, StackContainer};
use bindable_appbar::{BarButton, BarConductor, BarDefinition, BarMenuItem, HostBarSlot};

#[derive(Parser)]
#[command(name = "appbar-demo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Wait applied before assigning a bar into an empty slot, in
    /// milliseconds. Match this to the transition duration.
    #[arg(long, default_value_t = 800)]
    wait_threshold_ms: u64,

    /// Use a notebook (synchronous tab switches) instead of the animated
    /// carousel.
    #[arg(long)]
    tabbed: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let app = gtk4::Application::builder()
        .application_id("org.bindable-appbar.demo")
        .build();

    app.connect_activate(move |app| {
        build_ui(app, cli.tabbed, Duration::from_millis(cli.wait_threshold_ms));
    });

    // Arguments were handled by clap; don't let GTK see them.
    app.run_with_args::<&str>(&[]);
    Ok(())
}

fn build_ui(app: &gtk4::Application, tabbed: bool, wait_threshold: Duration) {
    let window = gtk4::ApplicationWindow::builder()
        .application(app)
        .title("Bindable AppBar Demo")
        .default_width(480)
        .default_height(640)
        .build();

    let slot = HostBarSlot::new();

    let first = BoundPage::new(page_body("first page"), slot.clone());
    for bar in first_page_bars() {
        first.add_bar(bar);
    }

    let second = BoundPage::new(page_body("second page"), slot.clone());
    second.add_bar(second_page_bar());

    let third = BoundPage::new(page_body("third page (no bar)"), slot.clone());

    let (container, selector): (Rc<dyn ItemContainer>, gtk4::Widget) = if tabbed {
        let notebook = gtk4::Notebook::new();
        let container = NotebookContainer::new(notebook.clone());
        container.add_page(first, "first");
        container.add_page(second, "second");
        container.add_page(third, "third");
        (container, notebook.upcast())
    } else {
        let stack = gtk4::Stack::new();
        stack.set_transition_type(gtk4::StackTransitionType::SlideLeftRight);
        stack.set_transition_duration(500);
        let container = StackContainer::new(stack.clone());
        container.add_page(first, "first");
        container.add_page(second, "second");
        container.add_page(third, "third");

        let switcher = gtk4::StackSwitcher::new();
        switcher.set_stack(Some(&stack));

        let carousel = gtk4::Box::new(Orientation::Vertical, 0);
        carousel.append(&switcher);
        carousel.append(&stack);
        (container, carousel.upcast())
    };

    let bar_widget = BarWidget::new(slot.clone());
    let vbox = gtk4::Box::new(Orientation::Vertical, 0);
    selector.set_vexpand(true);
    vbox.append(&selector);
    vbox.append(bar_widget.widget());
    window.set_child(Some(&vbox));

    let host = Element::new();
    host.set_container(container);
    let host: Rc<dyn ViewNode> = host;

    let options = ConductorOptions {
        wait_threshold,
        scheduler: Rc::new(GlibScheduler),
    };
    match BarConductor::attach_with(&host, slot, options) {
        Ok(conductor) => {
            window.connect_close_request(move |_| {
                conductor.detach();
                glib::Propagation::Proceed
            });
        }
        Err(e) => {
            eprintln!("Failed to attach conductor: {}", e);
            return;
        }
    }

    window.present();
}

fn page_body(text: &str) -> gtk4::Widget {
    let label = gtk4::Label::new(Some(text));
    label.set_vexpand(true);
    label.upcast()
}

/// The hot-swap demo: two bars in one view, exactly one visible at a time.
fn first_page_bars() -> Vec<Rc<BarDefinition>> {
    let primary = BarDefinition::new();
    let secondary = BarDefinition::new();
    secondary.set_visible(false);

    let refresh = BarButton::new("view-refresh-symbolic", "refresh");
    refresh.connect_clicked(|_| info!("refresh clicked"));
    primary.add_button(refresh);

    let swap = BarButton::new("object-flip-horizontal-symbolic", "swap");
    {
        let primary = primary.clone();
        let secondary = secondary.clone();
        swap.connect_clicked(move |_| {
            primary.set_visible(false);
            secondary.set_visible(true);
        });
    }
    primary.add_button(swap);

    let star = BarButton::new("starred-symbolic", "star");
    star.connect_clicked(|_| info!("star clicked"));
    secondary.add_button(star);

    let swap_back = BarButton::new("object-flip-horizontal-symbolic", "swap back");
    {
        let primary = primary.clone();
        let secondary = secondary.clone();
        swap_back.connect_clicked(move |_| {
            secondary.set_visible(false);
            primary.set_visible(true);
        });
    }
    secondary.add_button(swap_back);

    vec![primary, secondary]
}

fn second_page_bar() -> Rc<BarDefinition> {
    let bar = BarDefinition::new();

    let star = BarButton::new("starred-symbolic", "star");
    let toggle_star = star.clone();
    bar.add_button(star);

    let toggle = BarMenuItem::new("disable star");
    toggle.connect_clicked(move |_| {
        toggle_star.set_enabled(!toggle_star.is_enabled());
    });
    bar.add_menu_item(toggle);

    bar
}

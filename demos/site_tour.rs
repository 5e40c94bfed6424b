//! Walks the core flows without the GUI: seed data, a booking from
//! draft to settlement, table filters, and report summaries.
//!
//! Run with: cargo run --example site_tour

use anyhow::{Context, Result};
use festival_desk::booking::{self, BookingDraft};
use festival_desk::carousel::Carousel;
use festival_desk::config::AppConfig;
use festival_desk::data::DemoData;
use festival_desk::export::{self, ReportKind};
use festival_desk::filters::{Selection, TicketFilter};
use festival_desk::models::{BookingKind, TicketStatus};
use festival_desk::roles::Role;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = AppConfig::default();
    let data = DemoData::seed();

    println!("=== Festival Desk Tour ===\n");

    // 1. Seeded data
    println!("1. Seed data");
    println!("   Festival: {} ({})", config.festival.name, config.festival.date_line());
    println!(
        "   {} headliners, {} festival days, {} pass tiers",
        data.celebrities.len(),
        data.festival_days.len(),
        data.pass_types.len()
    );
    println!(
        "   {} bookings, {} accounts, {} gates\n",
        data.tickets.len(),
        data.users.len(),
        data.gates.len()
    );

    // 2. Pass catalog
    println!("2. Pass catalog");
    for pass in &data.pass_types {
        println!(
            "   {:<22} full event {}{}  single day {}{}",
            pass.name,
            config.festival.currency_symbol,
            pass.full_event_price,
            config.festival.currency_symbol,
            pass.single_day_price
        );
    }
    println!();

    // 3. A booking, start to finish
    println!("3. Booking walk");
    let pass = data
        .pass_types
        .iter()
        .find(|p| p.id == "couple")
        .context("couple pass missing from seed data")?
        .clone();
    let mut draft = BookingDraft::new(pass, BookingKind::FullEvent, vec![]);
    println!("   Draft opened for {}", draft.pass.name);
    println!("   Details gate with blank form: {}", draft.step_valid());

    draft.attendees[0].name = "Kavita Joshi".to_string();
    draft.attendees[0].age = "29".to_string();
    draft.add_attendee();
    draft.attendees[1].name = "Arjun Joshi".to_string();
    draft.attendees[1].age = "31".to_string();
    draft.contact.email = "kavita.joshi@email.com".to_string();
    draft.contact.phone = "+91 87654 32109".to_string();
    println!("   Details gate with filled form: {}", draft.step_valid());

    draft.go_next();
    println!("   Step: {}", draft.step.title());
    println!(
        "   Total due: {}{}",
        config.festival.currency_symbol,
        draft.total_price()
    );

    let mut quick = config.booking.clone();
    quick.settle_delay_ms = 50;
    let booking_id = booking::settle(&quick, draft.total_price()).await?;
    draft.confirm();
    println!("   Settled, booking id {}", booking_id);
    println!("   Step: {}\n", draft.step.title());

    // 4. A declined payment
    println!("4. Declined payment");
    quick.decline_above = 4000;
    match booking::settle(&quick, draft.total_price()).await {
        Ok(_) => println!("   Unexpectedly settled"),
        Err(e) => println!("   {}\n", e),
    }

    // 5. Ticket filters
    println!("5. Ticket filters");
    let filter = TicketFilter {
        search: "priya".to_string(),
        status: None,
    };
    let hits: Vec<_> = data.tickets.iter().filter(|t| filter.matches(t)).collect();
    println!("   Search 'priya' matches {} booking(s)", hits.len());
    for t in &hits {
        println!("     {} {} [{}]", t.booking_id, t.customer_name, t.status.label());
    }
    let confirmed = TicketFilter {
        search: String::new(),
        status: Some(TicketStatus::Confirmed),
    };
    println!(
        "   Status 'confirmed' matches {} of {}\n",
        data.tickets.iter().filter(|t| confirmed.matches(t)).count(),
        data.tickets.len()
    );

    // 6. Selection scoped to the filter
    println!("6. Selection");
    let mut selection = Selection::default();
    let visible: Vec<String> = data
        .tickets
        .iter()
        .filter(|t| confirmed.matches(t))
        .map(|t| t.id.clone())
        .collect();
    selection.toggle("off-screen-ticket");
    selection.toggle_all(&visible);
    println!("   Selected {} rows ({} visible plus 1 kept from outside the filter)", selection.len(), visible.len());
    selection.toggle_all(&visible);
    println!("   Visible rows deselected, {} still selected\n", selection.len());

    // 7. Carousel wraparound
    println!("7. Lineup carousel");
    let mut carousel = Carousel::new(data.celebrities.len());
    carousel.prev();
    println!(
        "   prev from the first slide lands on {} ({})",
        carousel.current() + 1,
        data.celebrities[carousel.current()].name
    );
    carousel.next();
    println!("   next wraps back to slide {}\n", carousel.current() + 1);

    // 8. Role gating and report summaries
    println!("8. Roles and reports");
    for role in Role::ADMIN_ROLES {
        println!("   {:<12} sees {} sections", role.label(), role.visible_sections().len());
    }
    let summary = export::report_summary(ReportKind::Sales, &data);
    println!(
        "   Sales report: revenue {}, top pass {}",
        summary["total_revenue"], summary["top_selling_pass"]
    );

    println!("\nDone.");
    Ok(())
}

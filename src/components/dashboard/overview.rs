use leptos::prelude::*;

use crate::components::dashboard::shell::DashboardShell;
use crate::components::dashboard::upload_modal::UploadModal;
use crate::components::design_system::Button;
use crate::services::calculator::calculate_refund;
use crate::services::invoices::{seed_invoices, InvoiceStatus};
use crate::utils::formatting::format_currency;

/// The feed never grows past this; the oldest entry falls off.
const ACTIVITY_CAP: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityItem {
    pub icon: &'static str,
    pub title: String,
    pub description: String,
    pub time: String,
}

fn seed_activity() -> Vec<ActivityItem> {
    vec![
        ActivityItem {
            icon: "approved",
            title: "Claim approved".to_string(),
            description: "INV-2024-0890 - $8,750 refund approved".to_string(),
            time: "2 hours ago".to_string(),
        },
        ActivityItem {
            icon: "processing",
            title: "Claim in review".to_string(),
            description: "INV-2024-0891 - classification under review".to_string(),
            time: "Yesterday".to_string(),
        },
        ActivityItem {
            icon: "upload",
            title: "Invoice uploaded".to_string(),
            description: "3 file(s) - Processing".to_string(),
            time: "2 days ago".to_string(),
        },
    ]
}

/// Dashboard landing view: headline stats, the upload entry point, and
/// the recent activity feed.
#[component]
pub fn Overview() -> impl IntoView {
    web_sys::console::log_1(&"Dashboard data loaded".into());

    let invoices = seed_invoices();
    let total_submitted: u32 = invoices.iter().map(|inv| inv.amount).sum();
    let approved_total: u32 = invoices
        .iter()
        .filter(|inv| inv.status == InvoiceStatus::Approved)
        .map(|inv| inv.amount)
        .sum();
    let pending_count = invoices
        .iter()
        .filter(|inv| inv.status == InvoiceStatus::Pending)
        .count();
    let estimated_recovery = calculate_refund(total_submitted as f64).gross_refund;

    let activity = RwSignal::new(seed_activity());
    let upload_open = RwSignal::new(false);

    let on_uploaded = Callback::new(move |count: usize| {
        activity.update(|feed| {
            feed.insert(
                0,
                ActivityItem {
                    icon: "upload",
                    title: "Invoice uploaded".to_string(),
                    description: format!("{} file(s) - Processing", count),
                    time: "Just now".to_string(),
                },
            );
            feed.truncate(ACTIVITY_CAP);
        });
    });

    view! {
        <DashboardShell active="dashboard">
            <header class="dashboard-header">
                <h1>"Dashboard"</h1>
                <Button on_click=Callback::new(move |_| upload_open.set(true))>
                    "Upload Invoices"
                </Button>
            </header>
            <section class="stat-cards">
                <div class="stat-card">
                    <span class="stat-card-label">"Tariffs submitted"</span>
                    <span class="stat-card-value">{format_currency(total_submitted)}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card-label">"Estimated recovery"</span>
                    <span class="stat-card-value">
                        {format_currency(estimated_recovery.round() as u32)}
                    </span>
                </div>
                <div class="stat-card">
                    <span class="stat-card-label">"Refunds approved"</span>
                    <span class="stat-card-value">{format_currency(approved_total)}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card-label">"Claims pending"</span>
                    <span class="stat-card-value">{pending_count}</span>
                </div>
            </section>
            <section class="activity">
                <h2>"Recent activity"</h2>
                <div class="activity-feed">
                    {move || {
                        activity
                            .get()
                            .into_iter()
                            .map(|item| {
                                view! {
                                    <div class="activity-item">
                                        <div class=format!(
                                            "activity-icon {}",
                                            item.icon,
                                        )></div>
                                        <div class="activity-content">
                                            <strong>{item.title}</strong>
                                            <p>{item.description}</p>
                                            <span class="activity-time">{item.time}</span>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </section>
            <UploadModal open=upload_open on_uploaded=on_uploaded />
        </DashboardShell>
    }
}

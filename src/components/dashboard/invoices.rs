use chrono::Local;
use leptos::prelude::*;

use crate::components::dashboard::shell::DashboardShell;
use crate::components::design_system::Select;
use crate::services::invoices::{InvoiceStatus, InvoiceTableState};
use crate::services::toast::use_toast;
use crate::utils::formatting::{format_currency, format_date};

/// Colored status pill for a table row.
#[component]
fn StatusBadge(status: InvoiceStatus) -> impl IntoView {
    view! {
        <span class=format!("status-badge {}", status.as_str())>{status.label()}</span>
    }
}

/// Invoice list page: search, status and date filters, row selection,
/// and pagination over the fixed dataset.
#[component]
pub fn Invoices() -> impl IntoView {
    let table = InvoiceTableState::new(Local::now().date_naive());
    let toasts = use_toast();

    view! {
        <DashboardShell active="invoices">
            <header class="dashboard-header">
                <h1>"Invoices"</h1>
            </header>
            <div class="invoice-filters">
                <input
                    class="form-input search-input"
                    type="search"
                    placeholder="Search by invoice, vendor, or tariff code"
                    prop:value=move || table.search.get()
                    on:input=move |evt| table.set_search(event_target_value(&evt))
                />
                <Select on_change=Callback::new(move |value: String| {
                    table.set_status(InvoiceStatus::from_str(&value));
                })>
                    <option value="">"All statuses"</option>
                    <option value="pending">"Pending"</option>
                    <option value="processed">"Processed"</option>
                    <option value="approved">"Approved"</option>
                </Select>
                <Select on_change=Callback::new(move |value: String| {
                    table.set_date_window(value.parse::<i64>().ok());
                })>
                    <option value="">"All dates"</option>
                    <option value="7">"Last 7 days"</option>
                    <option value="30">"Last 30 days"</option>
                    <option value="90">"Last 90 days"</option>
                </Select>
            </div>
            <table class="invoice-table">
                <thead>
                    <tr>
                        <th>
                            <input
                                type="checkbox"
                                aria-label="Select all"
                                prop:checked=move || table.all_visible_selected()
                                on:change=move |evt| table.select_all(event_target_checked(&evt))
                            />
                        </th>
                        <th>"Invoice"</th>
                        <th>"Date"</th>
                        <th>"Vendor"</th>
                        <th>"Amount"</th>
                        <th>"Tariff Code"</th>
                        <th>"Status"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = table.page_rows();
                        if rows.is_empty() {
                            return view! {
                                <tr class="empty-row">
                                    <td colspan="8">"No invoices match the current filters"</td>
                                </tr>
                            }
                                .into_any();
                        }
                        rows.into_iter()
                            .map(|inv| {
                                let toggle_id = inv.id.clone();
                                let checked_id = inv.id.clone();
                                let view_id = inv.id.clone();
                                let download_id = inv.id.clone();
                                view! {
                                    <tr>
                                        <td>
                                            <input
                                                type="checkbox"
                                                prop:checked=move || table.is_selected(&checked_id)
                                                on:change=move |_| table.toggle_selected(&toggle_id)
                                            />
                                        </td>
                                        <td>{inv.id.clone()}</td>
                                        <td>{format_date(inv.date)}</td>
                                        <td>{inv.vendor.clone()}</td>
                                        <td>{format_currency(inv.amount)}</td>
                                        <td>{inv.tariff_code.clone()}</td>
                                        <td>
                                            <StatusBadge status=inv.status />
                                        </td>
                                        <td class="row-actions">
                                            <button
                                                class="action-btn"
                                                on:click=move |_| {
                                                    toasts.info(format!("Viewing invoice {}", view_id));
                                                }
                                            >
                                                "View"
                                            </button>
                                            <button
                                                class="action-btn"
                                                on:click=move |_| {
                                                    toasts
                                                        .info(format!("Downloading invoice {}", download_id));
                                                }
                                            >
                                                "Download"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </tbody>
            </table>
            <div class="pagination">
                <button
                    class="page-btn"
                    disabled=move || table.page.get() == 1
                    on:click=move |_| table.prev_page()
                >
                    "Previous"
                </button>
                <span class="page-info">
                    {move || format!("Page {} of {}", table.page.get(), table.total_pages())}
                </span>
                <button
                    class="page-btn"
                    disabled=move || table.page.get() >= table.total_pages()
                    on:click=move |_| table.next_page()
                >
                    "Next"
                </button>
            </div>
        </DashboardShell>
    }
}

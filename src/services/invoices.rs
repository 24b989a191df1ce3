//! Invoice table state
//!
//! Holds the fixed invoice dataset and the search/status/date filter
//! pipeline behind the invoices page. Filtering and pagination are pure
//! functions over the record set; [`InvoiceTableState`] wraps them in
//! reactive signals for the table component.

use std::collections::HashSet;

use chrono::{Duration, NaiveDate};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Rows shown per table page.
pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Processed,
    Approved,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Processed => "processed",
            InvoiceStatus::Approved => "approved",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(InvoiceStatus::Pending),
            "processed" => Some(InvoiceStatus::Processed),
            "approved" => Some(InvoiceStatus::Approved),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "Pending",
            InvoiceStatus::Processed => "Processed",
            InvoiceStatus::Approved => "Approved",
        }
    }
}

/// A single imported invoice. The dataset is a fixed seed; records are
/// never created, updated, or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    pub id: String,
    pub date: NaiveDate,
    pub vendor: String,
    pub amount: u32,
    pub tariff_code: String,
    pub status: InvoiceStatus,
}

fn record(
    id: &str,
    date: (i32, u32, u32),
    vendor: &str,
    amount: u32,
    tariff_code: &str,
    status: InvoiceStatus,
) -> InvoiceRecord {
    InvoiceRecord {
        id: id.to_string(),
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).expect("seed dates are valid"),
        vendor: vendor.to_string(),
        amount,
        tariff_code: tariff_code.to_string(),
        status,
    }
}

/// The mock invoice dataset backing the dashboard.
pub fn seed_invoices() -> Vec<InvoiceRecord> {
    use InvoiceStatus::*;

    vec![
        record("INV-2024-0892", (2024, 2, 20), "Shanghai Electronics Co.", 3_450, "HTS 8471.30.0100", Pending),
        record("INV-2024-0891", (2024, 2, 19), "Global Imports Ltd.", 12_500, "HTS 8517.12.0050", Processed),
        record("INV-2024-0890", (2024, 2, 18), "China Manufacturing Inc.", 8_750, "HTS 9403.00.0050", Approved),
        record("INV-2024-0889", (2024, 2, 17), "Pacific Trading Co.", 5_200, "HTS 3926.90.9990", Pending),
        record("INV-2024-0888", (2024, 2, 16), "Import Solutions LLC", 9_800, "HTS 8481.80.5090", Processed),
        record("INV-2024-0887", (2024, 2, 15), "Overseas Logistics Corp", 6_300, "HTS 7326.90.8680", Approved),
        record("INV-2024-0886", (2024, 2, 14), "International Supply Co.", 4_100, "HTS 8708.29.5080", Pending),
        record("INV-2024-0885", (2024, 2, 13), "Asian Exports Ltd.", 7_900, "HTS 6110.20.2077", Processed),
        record("INV-2024-0884", (2024, 2, 12), "Worldwide Trading Inc.", 11_200, "HTS 9031.80.9100", Approved),
        record("INV-2024-0883", (2024, 2, 11), "Pacific Manufacturing Co.", 5_600, "HTS 8414.59.8520", Pending),
    ]
}

/// The current view over the record set. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub search: String,
    pub status: Option<InvoiceStatus>,
    pub date_window_days: Option<i64>,
    pub page: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: None,
            date_window_days: None,
            page: 1,
        }
    }
}

/// Apply the three filter predicates as a conjunction.
///
/// Search matches case-insensitively against id, vendor, and tariff code.
/// The date window keeps invoices strictly newer than `today - days`, so a
/// 7-day window relative to 2024-02-20 spans 2024-02-14..2024-02-20.
pub fn apply_filters(
    records: &[InvoiceRecord],
    filter: &FilterState,
    today: NaiveDate,
) -> Vec<InvoiceRecord> {
    let needle = filter.search.trim().to_lowercase();

    records
        .iter()
        .filter(|inv| {
            let matches_search = needle.is_empty()
                || inv.id.to_lowercase().contains(&needle)
                || inv.vendor.to_lowercase().contains(&needle)
                || inv.tariff_code.to_lowercase().contains(&needle);

            let matches_status = filter.status.map_or(true, |s| inv.status == s);

            let matches_date = filter
                .date_window_days
                .map_or(true, |days| inv.date > today - Duration::days(days));

            matches_search && matches_status && matches_date
        })
        .cloned()
        .collect()
}

/// Number of pages for a filtered set. An empty set still has one page.
pub fn total_pages(record_count: usize) -> usize {
    if record_count == 0 {
        1
    } else {
        record_count.div_ceil(PAGE_SIZE)
    }
}

/// The `[(n-1)*PAGE_SIZE, n*PAGE_SIZE)` slice of the filtered set, with
/// `page` clamped to the valid range.
pub fn page_slice(filtered: &[InvoiceRecord], page: usize) -> &[InvoiceRecord] {
    let page = page.clamp(1, total_pages(filtered.len()));
    let start = (page - 1) * PAGE_SIZE;
    if start >= filtered.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(filtered.len());
    &filtered[start..end]
}

/// Reactive wrapper around the invoice dataset and its filter pipeline.
///
/// The filtered view is a memo over the filter signals, so any input change
/// regenerates the visible rows from scratch. `today` is captured at
/// construction so the relative date filter stays stable for the lifetime
/// of the page.
#[derive(Clone, Copy)]
pub struct InvoiceTableState {
    pub records: RwSignal<Vec<InvoiceRecord>>,
    pub search: RwSignal<String>,
    pub status: RwSignal<Option<InvoiceStatus>>,
    pub date_window_days: RwSignal<Option<i64>>,
    pub page: RwSignal<usize>,
    pub selected: RwSignal<HashSet<String>>,
    pub filtered: Memo<Vec<InvoiceRecord>>,
    pub today: NaiveDate,
}

impl InvoiceTableState {
    pub fn new(today: NaiveDate) -> Self {
        let records = RwSignal::new(seed_invoices());
        let search = RwSignal::new(String::new());
        let status = RwSignal::new(None::<InvoiceStatus>);
        let date_window_days = RwSignal::new(None::<i64>);
        let page = RwSignal::new(1);
        let selected = RwSignal::new(HashSet::new());

        let filtered = Memo::new(move |_| {
            let filter = FilterState {
                search: search.get(),
                status: status.get(),
                date_window_days: date_window_days.get(),
                page: 1,
            };
            apply_filters(&records.get(), &filter, today)
        });

        Self {
            records,
            search,
            status,
            date_window_days,
            page,
            selected,
            filtered,
            today,
        }
    }

    pub fn set_search(&self, term: impl Into<String>) {
        self.search.set(term.into());
        self.page.set(1);
    }

    pub fn set_status(&self, status: Option<InvoiceStatus>) {
        self.status.set(status);
        self.page.set(1);
    }

    pub fn set_date_window(&self, days: Option<i64>) {
        self.date_window_days.set(days);
        self.page.set(1);
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered.get().len())
    }

    /// Rows visible on the current page.
    pub fn page_rows(&self) -> Vec<InvoiceRecord> {
        page_slice(&self.filtered.get(), self.page.get()).to_vec()
    }

    /// No-op when already on the last page.
    pub fn next_page(&self) {
        let last = self.total_pages();
        self.page.update(|p| {
            if *p < last {
                *p += 1;
            }
        });
    }

    /// No-op when already on the first page.
    pub fn prev_page(&self) {
        self.page.update(|p| {
            if *p > 1 {
                *p -= 1;
            }
        });
    }

    /// Mark or unmark every currently rendered row.
    pub fn select_all(&self, checked: bool) {
        let ids: Vec<String> = self.page_rows().into_iter().map(|inv| inv.id).collect();
        self.selected.update(|sel| {
            for id in ids {
                if checked {
                    sel.insert(id);
                } else {
                    sel.remove(&id);
                }
            }
        });
    }

    pub fn toggle_selected(&self, id: &str) {
        self.selected.update(|sel| {
            if !sel.remove(id) {
                sel.insert(id.to_string());
            }
        });
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.with(|sel| sel.contains(id))
    }

    pub fn all_visible_selected(&self) -> bool {
        let rows = self.page_rows();
        !rows.is_empty() && rows.iter().all(|inv| self.is_selected(&inv.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The seed dataset runs 2024-02-11..2024-02-20, so tests freeze "today"
    // at the newest invoice date.
    fn frozen_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 20).unwrap()
    }

    fn filter(search: &str, status: Option<InvoiceStatus>, days: Option<i64>) -> FilterState {
        FilterState {
            search: search.to_string(),
            status,
            date_window_days: days,
            page: 1,
        }
    }

    #[test]
    fn test_seed_has_ten_records() {
        assert_eq!(seed_invoices().len(), 10);
    }

    #[test]
    fn test_search_shanghai_matches_single_record() {
        let records = seed_invoices();
        let result = apply_filters(&records, &filter("shanghai", None, None), frozen_today());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "INV-2024-0892");
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let records = seed_invoices();

        // id fragment
        let by_id = apply_filters(&records, &filter("0885", None, None), frozen_today());
        assert_eq!(by_id.len(), 1);
        assert_eq!(by_id[0].vendor, "Asian Exports Ltd.");

        // tariff code fragment, mixed case
        let by_code = apply_filters(&records, &filter("hts 8517", None, None), frozen_today());
        assert_eq!(by_code.len(), 1);
        assert_eq!(by_code[0].id, "INV-2024-0891");
    }

    #[test]
    fn test_status_approved_matches_three_records() {
        let records = seed_invoices();
        let result = apply_filters(
            &records,
            &filter("", Some(InvoiceStatus::Approved), None),
            frozen_today(),
        );
        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|inv| inv.status == InvoiceStatus::Approved));
    }

    #[test]
    fn test_seven_day_window_keeps_feb_14_through_feb_20() {
        let records = seed_invoices();
        let result = apply_filters(&records, &filter("", None, Some(7)), frozen_today());

        let expected_oldest = NaiveDate::from_ymd_opt(2024, 2, 14).unwrap();
        assert_eq!(result.len(), 7);
        assert!(result.iter().all(|inv| inv.date >= expected_oldest));
        assert!(result.iter().any(|inv| inv.date == expected_oldest));
    }

    #[test]
    fn test_filters_conjoin() {
        let records = seed_invoices();
        let result = apply_filters(
            &records,
            &filter("pacific", Some(InvoiceStatus::Pending), Some(7)),
            frozen_today(),
        );
        // "Pacific Trading Co." (0889) is pending and within the window;
        // "Pacific Manufacturing Co." (0883, 2024-02-11) falls outside it.
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "INV-2024-0889");
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let records = seed_invoices();
        let f = filter("co", Some(InvoiceStatus::Pending), Some(30));
        let once = apply_filters(&records, &f, frozen_today());
        let twice = apply_filters(&once, &f, frozen_today());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_no_match_yields_empty_set_and_one_page() {
        let records = seed_invoices();
        let result = apply_filters(&records, &filter("zzz-no-match", None, None), frozen_today());
        assert!(result.is_empty());
        assert_eq!(total_pages(result.len()), 1);
        assert!(page_slice(&result, 1).is_empty());
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(0), 1);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(10), 1);
        assert_eq!(total_pages(11), 2);
        assert_eq!(total_pages(20), 2);
        assert_eq!(total_pages(21), 3);
    }

    #[test]
    fn test_pages_reconstruct_filtered_set() {
        let records = seed_invoices();
        let filtered = apply_filters(&records, &filter("", None, None), frozen_today());

        let mut reassembled = Vec::new();
        for page in 1..=total_pages(filtered.len()) {
            reassembled.extend_from_slice(page_slice(&filtered, page));
        }

        assert_eq!(reassembled, filtered);
        let ids: HashSet<&str> = reassembled.iter().map(|inv| inv.id.as_str()).collect();
        assert_eq!(ids.len(), reassembled.len(), "pages must not duplicate rows");
    }

    fn synthetic_records(count: usize) -> Vec<InvoiceRecord> {
        let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        (0..count)
            .map(|i| InvoiceRecord {
                id: format!("INV-2024-{:04}", 1_000 + i),
                date: base + Duration::days(i as i64),
                vendor: format!("Vendor {}", i),
                amount: 1_000 + i as u32,
                tariff_code: format!("HTS 0000.00.{:04}", i),
                status: InvoiceStatus::Pending,
            })
            .collect()
    }

    #[test]
    fn test_pages_reconstruct_multi_page_set() {
        // 23 records: two full pages plus a 3-row remainder.
        let records = synthetic_records(23);
        let filtered = apply_filters(&records, &filter("", None, None), frozen_today());

        assert_eq!(total_pages(filtered.len()), 3);
        assert_eq!(page_slice(&filtered, 1).len(), PAGE_SIZE);
        assert_eq!(page_slice(&filtered, 2).len(), PAGE_SIZE);
        assert_eq!(page_slice(&filtered, 3).len(), 3);

        // The slice boundary must not drop or repeat the fencepost rows.
        assert_eq!(page_slice(&filtered, 1).last(), Some(&filtered[9]));
        assert_eq!(page_slice(&filtered, 2).first(), Some(&filtered[10]));

        let mut reassembled = Vec::new();
        for page in 1..=total_pages(filtered.len()) {
            reassembled.extend_from_slice(page_slice(&filtered, page));
        }
        assert_eq!(reassembled, filtered);
    }

    #[test]
    fn test_page_slice_clamps_out_of_range_pages() {
        let records = seed_invoices();
        assert_eq!(page_slice(&records, 0), page_slice(&records, 1));
        assert_eq!(page_slice(&records, 99), page_slice(&records, 1));
    }

    #[test]
    fn test_state_filter_change_resets_page() {
        let table = InvoiceTableState::new(frozen_today());
        table.set_search("co");
        assert_eq!(table.page.get(), 1);

        // The search term stays active: "co" + approved only matches
        // "Overseas Logistics Corp".
        table.set_status(Some(InvoiceStatus::Approved));
        assert_eq!(table.page.get(), 1);
        assert_eq!(table.filtered.get().len(), 1);
        assert_eq!(table.filtered.get()[0].id, "INV-2024-0887");

        table.set_search("");
        assert_eq!(table.page.get(), 1);
        assert_eq!(table.filtered.get().len(), 3);
    }

    #[test]
    fn test_state_page_navigation_clamps_at_boundaries() {
        let table = InvoiceTableState::new(frozen_today());
        // ten records fit on one page, so both directions are no-ops
        table.prev_page();
        assert_eq!(table.page.get(), 1);
        table.next_page();
        assert_eq!(table.page.get(), 1);
    }

    #[test]
    fn test_state_select_all_then_clear_leaves_nothing_selected() {
        let table = InvoiceTableState::new(frozen_today());

        table.select_all(true);
        assert!(table.all_visible_selected());
        assert_eq!(table.selected.with(|s| s.len()), 10);

        table.select_all(false);
        assert!(!table.all_visible_selected());
        assert!(table.selected.with(|s| s.is_empty()));
    }

    #[test]
    fn test_state_toggle_selected() {
        let table = InvoiceTableState::new(frozen_today());
        table.toggle_selected("INV-2024-0892");
        assert!(table.is_selected("INV-2024-0892"));
        table.toggle_selected("INV-2024-0892");
        assert!(!table.is_selected("INV-2024-0892"));
    }

    #[test]
    fn test_state_filtered_view_is_deterministic() {
        let table = InvoiceTableState::new(frozen_today());
        table.set_search("shanghai");
        let first = table.filtered.get();
        let second = table.filtered.get();
        assert_eq!(first, second);
        assert_eq!(first.len(), 1);
    }
}

use yew::prelude::*;

use crate::format::{format_currency, format_local_timestamp};
use crate::models::{SortColumn, SortOrder, Transaction};

/// Pager figures derived from the raw page; `current` is always in range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    pub current: u32,
    pub total_pages: u32,
}

impl Pager {
    pub fn new(page: u32, total: u64, per_page: u32) -> Self {
        let per_page = u64::from(per_page.max(1));
        let pages = total.div_ceil(per_page).max(1);
        let total_pages = u32::try_from(pages).unwrap_or(u32::MAX);
        Self {
            current: page.clamp(1, total_pages),
            total_pages,
        }
    }

    pub fn prev_disabled(&self) -> bool {
        self.current == 1
    }

    pub fn next_disabled(&self) -> bool {
        self.current >= self.total_pages
    }

    pub fn prev_page(&self) -> u32 {
        self.current.saturating_sub(1).max(1)
    }

    pub fn next_page(&self) -> u32 {
        self.current.saturating_add(1)
    }

    pub fn label(&self) -> String {
        format!("Halaman {} dari {}", self.current, self.total_pages)
    }
}

/// What the listing card shows; only `Rows` carries a pager.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListingView {
    Loading,
    Empty,
    Rows(Pager),
}

impl ListingView {
    pub fn new(loading: bool, rows: usize, page: u32, total: u64, per_page: u32) -> Self {
        if loading {
            ListingView::Loading
        } else if rows == 0 {
            ListingView::Empty
        } else {
            ListingView::Rows(Pager::new(page, total, per_page))
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatusBadge {
    Warning,
    Danger,
    Success(String),
}

impl StatusBadge {
    /// Exact, case-sensitive match on the server's status string.
    pub fn for_status(status: &str) -> Self {
        match status {
            "PENDING" => StatusBadge::Warning,
            "FAILED" => StatusBadge::Danger,
            other => StatusBadge::Success(other.to_string()),
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            StatusBadge::Warning => "px-3 py-1 rounded-full text-[10px] font-bold bg-amber-100 text-amber-700",
            StatusBadge::Danger => "px-3 py-1 rounded-full text-[10px] font-bold bg-red-100 text-red-700",
            StatusBadge::Success(_) => "px-3 py-1 rounded-full text-[10px] font-bold bg-green-100 text-green-700",
        }
    }

    pub fn label(&self) -> String {
        match self {
            StatusBadge::Warning => "⚠️ Pending".to_string(),
            StatusBadge::Danger => "❌ Failed".to_string(),
            StatusBadge::Success(status) => format!("✓ {}", status),
        }
    }
}

/// Same column flips the order, a new column starts ascending.
pub fn next_sort(sort_by: SortColumn, order: SortOrder, clicked: SortColumn) -> (SortColumn, SortOrder) {
    if sort_by == clicked {
        (clicked, order.toggled())
    } else {
        (clicked, SortOrder::Asc)
    }
}

#[derive(Properties, PartialEq)]
pub struct TransactionTableProps {
    pub transactions: Vec<Transaction>,
    pub loading: bool,
    pub page: u32,
    pub total: u64,
    pub per_page: u32,
    pub sort_by: SortColumn,
    pub order: SortOrder,
    pub on_page_change: Callback<u32>,
    /// Emitted on header clicks; the receiver also resets to page 1.
    pub on_sort_change: Callback<(SortColumn, SortOrder)>,
}

#[function_component(TransactionTable)]
pub fn transaction_table(props: &TransactionTableProps) -> Html {
    let view = ListingView::new(
        props.loading,
        props.transactions.len(),
        props.page,
        props.total,
        props.per_page,
    );

    let sort_header = |label: &'static str, column: SortColumn, extra_class: &'static str| {
        let on_sort_change = props.on_sort_change.clone();
        let (sort_by, order) = (props.sort_by, props.order);
        let onclick = Callback::from(move |_| on_sort_change.emit(next_sort(sort_by, order, column)));
        let arrow = if sort_by == column { order.arrow() } else { "" };
        html! {
            <th class={classes!("px-8", "py-4", "font-bold", "cursor-pointer", "hover:text-primary", extra_class)} onclick={onclick}>
                <div class="inline-flex items-center gap-1">
                    { label }
                    <span>{ arrow }</span>
                </div>
            </th>
        }
    };

    let body = match view {
        ListingView::Loading => html! {
            <div class="text-center py-8 text-muted-foreground">
                <p>{"Memuat data transaksi..."}</p>
            </div>
        },
        ListingView::Empty => html! {
            <div class="text-center py-8 text-muted-foreground">
                <p>{"Tidak ada data transaksi"}</p>
            </div>
        },
        ListingView::Rows(pager) => {
            let on_prev = {
                let on_page_change = props.on_page_change.clone();
                let target = pager.prev_page();
                Callback::from(move |_| on_page_change.emit(target))
            };
            let on_next = {
                let on_page_change = props.on_page_change.clone();
                let target = pager.next_page();
                Callback::from(move |_| on_page_change.emit(target))
            };

            html! {
                <>
                    <div class="overflow-x-auto">
                        <table class="w-full text-left border-collapse">
                            <thead>
                                <tr class="bg-muted/50 text-muted-foreground text-[10px] uppercase tracking-widest">
                                    { sort_header("Tanggal", SortColumn::Timestamp, "") }
                                    <th class="px-8 py-4 font-bold">{"Nama"}</th>
                                    <th class="px-8 py-4 font-bold">{"Tipe"}</th>
                                    { sort_header("Jumlah", SortColumn::Amount, "text-right") }
                                    <th class="px-8 py-4 font-bold">{"Status"}</th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-border">
                                { for props.transactions.iter().enumerate().map(|(idx, tx)| {
                                    let badge = StatusBadge::for_status(&tx.status);
                                    html! {
                                        <tr key={format!("{}-{}", tx.timestamp, idx)} class="text-sm hover:bg-muted/30 transition-colors">
                                            <td class="px-8 py-4 text-muted-foreground">{ format_local_timestamp(tx.timestamp) }</td>
                                            <td class="px-8 py-4">
                                                <div class="font-medium text-foreground">{ &tx.name }</div>
                                                <div class="text-xs text-muted-foreground">{ &tx.description }</div>
                                            </td>
                                            <td class="px-8 py-4 capitalize">{ tx.kind.to_lowercase() }</td>
                                            <td class="px-8 py-4 text-right font-semibold text-foreground">{ format_currency(tx.amount) }</td>
                                            <td class="px-8 py-4">
                                                <span class={badge.class()}>{ badge.label() }</span>
                                            </td>
                                        </tr>
                                    }
                                }) }
                            </tbody>
                        </table>
                    </div>

                    <div class="flex items-center justify-between px-6 py-4 border-t border-border">
                        <button onclick={on_prev} disabled={pager.prev_disabled()} class="px-4 py-2 rounded-lg border border-border text-sm disabled:opacity-50">
                            {"Sebelumnya"}
                        </button>
                        <span class="text-sm">{ pager.label() }</span>
                        <button onclick={on_next} disabled={pager.next_disabled()} class="px-4 py-2 rounded-lg border border-border text-sm disabled:opacity-50">
                            {"Selanjutnya"}
                        </button>
                    </div>
                </>
            }
        }
    };

    html! {
        <div class="bg-card rounded-[10px] shadow-sm border border-border overflow-hidden">
            <div class="p-6 flex justify-between items-center border-b border-border">
                <h3 class="font-bold text-foreground text-lg">{"Daftar Transaksi"}</h3>
            </div>
            { body }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pager_matches_ceiling_and_clamps() {
        for total in [0u64, 1, 9, 10, 11, 25, 100] {
            for page in [1u32, 2, 3, 50] {
                let pager = Pager::new(page, total, 10);
                let expected_pages = std::cmp::max(1, total.div_ceil(10)) as u32;
                assert_eq!(pager.total_pages, expected_pages);
                assert_eq!(pager.current, page.min(expected_pages));
                assert_eq!(pager.prev_disabled(), pager.current == 1);
                assert_eq!(pager.next_disabled(), pager.current >= expected_pages);
            }
        }
    }

    #[test]
    fn twenty_five_rows_make_three_pages() {
        let first = Pager::new(1, 25, 10);
        assert_eq!(first.label(), "Halaman 1 dari 3");
        assert!(first.prev_disabled());
        assert!(!first.next_disabled());

        let last = Pager::new(3, 25, 10);
        assert_eq!(last.label(), "Halaman 3 dari 3");
        assert!(last.next_disabled());
        assert!(!last.prev_disabled());
    }

    #[test]
    fn empty_listing_still_shows_one_page() {
        assert_eq!(Pager::new(1, 0, 10).label(), "Halaman 1 dari 1");
    }

    #[test]
    fn page_past_the_end_after_total_shrinks_is_clamped() {
        let pager = Pager::new(7, 12, 10);
        assert_eq!(pager.current, 2);
        assert_eq!(pager.prev_page(), 1);
    }

    #[test]
    fn pager_steps_from_clamped_page() {
        let pager = Pager::new(2, 25, 10);
        assert_eq!(pager.prev_page(), 1);
        assert_eq!(pager.next_page(), 3);
        assert_eq!(Pager::new(1, 25, 10).prev_page(), 1);
    }

    #[test]
    fn loading_hides_rows_and_pager() {
        assert_eq!(ListingView::new(true, 10, 1, 25, 10), ListingView::Loading);
        assert_eq!(ListingView::new(true, 0, 1, 0, 10), ListingView::Loading);
    }

    #[test]
    fn no_rows_shows_placeholder_without_pager() {
        assert_eq!(ListingView::new(false, 0, 1, 25, 10), ListingView::Empty);
    }

    #[test]
    fn populated_listing_carries_clamped_pager() {
        assert_eq!(
            ListingView::new(false, 5, 9, 25, 10),
            ListingView::Rows(Pager {
                current: 3,
                total_pages: 3
            })
        );
    }

    #[test]
    fn failed_refresh_after_success_shows_placeholder_not_stale_rows() {
        use std::rc::Rc;

        use yew::Reducible;

        use crate::api::Snapshot;
        use crate::controller::{Action, ViewState};
        use crate::error::ClientError;
        use crate::models::ListingPage;

        let row = Transaction {
            timestamp: 1_700_000_000,
            name: "JOHN".into(),
            kind: "DEBIT".into(),
            amount: 5_000,
            status: "FAILED".into(),
            description: String::new(),
        };
        let project = |state: &ViewState| {
            ListingView::new(
                state.busy(),
                state.transactions.len(),
                state.query.page,
                state.total,
                state.query.per_page,
            )
        };

        let state = Rc::new(ViewState::new(10))
            .reduce(Action::RefreshStarted(1))
            .reduce(Action::RefreshFinished {
                generation: 1,
                outcome: Ok(Snapshot {
                    balance: 5_000,
                    listing: ListingPage {
                        items: vec![row],
                        total: 1,
                    },
                }),
            });
        assert!(matches!(project(&state), ListingView::Rows(_)));

        let state = state.reduce(Action::RefreshStarted(2));
        assert_eq!(project(&state), ListingView::Loading);

        let state = state.reduce(Action::RefreshFinished {
            generation: 2,
            outcome: Err(ClientError::Network("offline".into())),
        });
        assert_eq!(project(&state), ListingView::Empty);
        assert_eq!(state.balance, None);
    }

    #[test]
    fn status_mapping_is_exact() {
        assert_eq!(StatusBadge::for_status("PENDING"), StatusBadge::Warning);
        assert_eq!(StatusBadge::for_status("FAILED"), StatusBadge::Danger);
        assert_eq!(
            StatusBadge::for_status("pending"),
            StatusBadge::Success("pending".into())
        );
        assert_eq!(StatusBadge::for_status("SUCCESS").label(), "✓ SUCCESS");
        assert_eq!(StatusBadge::for_status("REFUNDED").label(), "✓ REFUNDED");
    }

    #[test]
    fn clicking_active_column_toggles_order_once() {
        assert_eq!(
            next_sort(SortColumn::Timestamp, SortOrder::Desc, SortColumn::Timestamp),
            (SortColumn::Timestamp, SortOrder::Asc)
        );
        assert_eq!(
            next_sort(SortColumn::Amount, SortOrder::Asc, SortColumn::Amount),
            (SortColumn::Amount, SortOrder::Desc)
        );
    }

    #[test]
    fn clicking_other_column_starts_ascending() {
        assert_eq!(
            next_sort(SortColumn::Timestamp, SortOrder::Desc, SortColumn::Amount),
            (SortColumn::Amount, SortOrder::Asc)
        );
        assert_eq!(
            next_sort(SortColumn::Amount, SortOrder::Desc, SortColumn::Timestamp),
            (SortColumn::Timestamp, SortOrder::Asc)
        );
    }
}

use crate::table::{clamp_page, compute_filtered_view, RecordStore};
use crate::ui::mvi::Reducer;
use crate::ui::table::intent::TableIntent;
use crate::ui::table::state::{LoadStatus, TableState};

pub struct TableReducer;

impl Reducer for TableReducer {
    type State = TableState;
    type Intent = TableIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TableIntent::Loaded { products } => {
                state.store = RecordStore::new(products);
                state.load = LoadStatus::Ready;
                recompute(&mut state);
            }
            TableIntent::LoadFailed { message } => {
                state.store = RecordStore::default();
                state.load = LoadStatus::Failed { message };
                recompute(&mut state);
            }
            TableIntent::SetSearchText { text } => {
                state.query.set_search_text(&text);
                state.query.current_page = 1;
                recompute(&mut state);
            }
            TableIntent::SetSort { sort } => {
                state.query.sort = sort;
                recompute(&mut state);
            }
            TableIntent::SetPageSize { size } => {
                // Membership is unchanged; only the page math moves.
                state.query.page_size = size;
                state.query.current_page = 1;
            }
            TableIntent::ChangePage { delta } => {
                let target = current_page(&state).saturating_add(delta);
                let last = i64::try_from(state.page_count()).unwrap_or(i64::MAX);
                if (1..=last).contains(&target) {
                    state.query.current_page = clamp_page(target, state.page_count());
                }
            }
            TableIntent::GoToPage { page } => {
                state.query.current_page = clamp_page(page, state.page_count());
            }
        }

        state.query.current_page = clamp_page(current_page(&state), state.page_count());
        state
    }
}

fn recompute(state: &mut TableState) {
    state.view = compute_filtered_view(state.store.records(), &state.query);
}

fn current_page(state: &TableState) -> i64 {
    i64::try_from(state.query.current_page).unwrap_or(i64::MAX)
}

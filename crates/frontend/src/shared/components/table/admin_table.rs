//! Generic paginated table used by every listing and account page.
//!
//! ```ignore
//! let columns = vec![
//!     ColumnDef::new("title", "Title").data_index("title"),
//!     ColumnDef::new("status", "Status")
//!         .data_index("status")
//!         .width(110)
//!         .render(|value, _row, _idx| view! { <StatusBadge status=value.unwrap_or_default() /> }.into_any()),
//! ];
//!
//! <AdminTable
//!     data=rows
//!     columns=columns
//!     is_loading=loading
//!     pagination=pagination
//!     empty_message="No vehicles found"
//!     row_class=RowClass::striped()
//! />
//! ```

use std::sync::Arc;

use leptos::prelude::*;
use thaw::*;

use super::header_cell::HeaderCell;
use crate::shared::components::pagination_controls::{PaginationControls, PaginationOptions};

pub const DEFAULT_EMPTY_MESSAGE: &str = "No data found";

/// A record the table can render.
pub trait TableRecord {
    /// Unique within a page and stable across refetches.
    fn id(&self) -> &str;

    /// Display value of a named field, used by [`ColumnDef::data_index`].
    fn field(&self, name: &str) -> Option<String> {
        let _ = name;
        None
    }
}

pub type CellRenderer<T> = Arc<dyn Fn(Option<String>, &T, usize) -> AnyView + Send + Sync>;

/// One column of an [`AdminTable`].
///
/// Without a renderer the accessor value is shown as text.
pub struct ColumnDef<T> {
    pub key: &'static str,
    pub title: String,
    pub data_index: Option<&'static str>,
    pub width: Option<u32>,
    pub class: Option<&'static str>,
    pub render: Option<CellRenderer<T>>,
}

impl<T> Clone for ColumnDef<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            title: self.title.clone(),
            data_index: self.data_index,
            width: self.width,
            class: self.class,
            render: self.render.clone(),
        }
    }
}

impl<T: TableRecord> ColumnDef<T> {
    pub fn new(key: &'static str, title: impl Into<String>) -> Self {
        Self {
            key,
            title: title.into(),
            data_index: None,
            width: None,
            class: None,
            render: None,
        }
    }

    pub fn data_index(mut self, field: &'static str) -> Self {
        self.data_index = Some(field);
        self
    }

    pub fn width(mut self, px: u32) -> Self {
        self.width = Some(px);
        self
    }

    pub fn class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    pub fn render(
        mut self,
        render: impl Fn(Option<String>, &T, usize) -> AnyView + Send + Sync + 'static,
    ) -> Self {
        self.render = Some(Arc::new(render));
        self
    }

    /// Value handed to the renderer: the accessor field, or `None` when the
    /// column reads the whole row.
    pub fn cell_value(&self, row: &T) -> Option<String> {
        self.data_index.and_then(|field| row.field(field))
    }

    fn header_style(&self) -> String {
        self.width
            .map(|px| format!("width: {}px;", px))
            .unwrap_or_default()
    }

    fn render_cell(&self, row: &T, index: usize) -> AnyView {
        let value = self.cell_value(row);
        match &self.render {
            Some(render) => render(value, row, index),
            None => view! { <span>{value.unwrap_or_default()}</span> }.into_any(),
        }
    }
}

/// Per-row CSS class: fixed, or computed from the row and its index.
pub enum RowClass<T> {
    Static(String),
    Dynamic(Arc<dyn Fn(&T, usize) -> String + Send + Sync>),
}

impl<T> Clone for RowClass<T> {
    fn clone(&self) -> Self {
        match self {
            RowClass::Static(class) => RowClass::Static(class.clone()),
            RowClass::Dynamic(f) => RowClass::Dynamic(Arc::clone(f)),
        }
    }
}

impl<T> RowClass<T> {
    pub fn dynamic(f: impl Fn(&T, usize) -> String + Send + Sync + 'static) -> Self {
        RowClass::Dynamic(Arc::new(f))
    }

    /// Zebra striping on odd rows.
    pub fn striped() -> Self {
        Self::dynamic(|_, index| {
            if index % 2 == 1 {
                "table__row--striped".to_string()
            } else {
                String::new()
            }
        })
    }

    pub fn resolve(&self, row: &T, index: usize) -> String {
        match self {
            RowClass::Static(class) => class.clone(),
            RowClass::Dynamic(f) => f(row, index),
        }
    }
}

/// Which body the table shows. Loading wins over stale rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyState {
    Loading,
    Empty,
    Rows,
}

impl BodyState {
    pub fn resolve(is_loading: bool, row_count: usize) -> Self {
        if is_loading {
            BodyState::Loading
        } else if row_count == 0 {
            BodyState::Empty
        } else {
            BodyState::Rows
        }
    }
}

#[component]
pub fn AdminTable<T>(
    /// Rows of the current page, already filtered and ordered by the caller
    #[prop(into)]
    data: Signal<Vec<T>>,
    columns: Vec<ColumnDef<T>>,
    #[prop(into)]
    is_loading: Signal<bool>,
    /// Footer page control; hidden while `total` is zero
    #[prop(optional)]
    pagination: Option<PaginationOptions>,
    #[prop(optional, into)]
    empty_message: Option<String>,
    #[prop(optional)]
    row_class: Option<RowClass<T>>,
    /// Extra classes for the wrapper
    #[prop(optional, into)]
    class: Option<String>,
) -> impl IntoView
where
    T: TableRecord + Clone + Send + Sync + 'static,
{
    let columns = Arc::new(columns);
    let column_count = columns.len().to_string();
    let empty_message = empty_message.unwrap_or_else(|| DEFAULT_EMPTY_MESSAGE.to_string());
    let wrapper_class = format!("admin-table {}", class.unwrap_or_default());

    let header = columns
        .iter()
        .map(|col| {
            let class = col.class.unwrap_or_default();
            let style = col.header_style();
            let title = col.title.clone();
            view! {
                <TableHeaderCell class=class attr:style=style>
                    <HeaderCell title=title />
                </TableHeaderCell>
            }
        })
        .collect_view();

    let body = move || {
        let state = BodyState::resolve(is_loading.get(), data.with(Vec::len));
        match state {
            BodyState::Loading => {
                let colspan = column_count.clone();
                view! {
                <TableRow>
                    <TableCell class="table__placeholder" attr:colspan=colspan>
                        <div class="spinner"></div>
                    </TableCell>
                </TableRow>
            }
            .into_any()
            }
            BodyState::Empty => {
                let colspan = column_count.clone();
                let empty_message = empty_message.clone();
                view! {
                <TableRow>
                    <TableCell class="table__placeholder table__placeholder--empty" attr:colspan=colspan>
                        {empty_message}
                    </TableCell>
                </TableRow>
            }
            .into_any()
            }
            BodyState::Rows => {
                let columns = Arc::clone(&columns);
                let row_class = row_class.clone();
                data.get()
                    .into_iter()
                    .enumerate()
                    .map(|(index, row)| {
                        let class = row_class
                            .as_ref()
                            .map(|rc| rc.resolve(&row, index))
                            .unwrap_or_default();
                        let cells = columns
                            .iter()
                            .map(|col| {
                                let class = col.class.unwrap_or_default();
                                let cell = col.render_cell(&row, index);
                                view! {
                                    <TableCell class=class>
                                        {cell}
                                    </TableCell>
                                }
                            })
                            .collect_view();
                        let row_id = row.id().to_string();
                        view! {
                            <TableRow class=class attr:data-row-id=row_id>
                                {cells}
                            </TableRow>
                        }
                    })
                    .collect_view()
                    .into_any()
            }
        }
    };

    view! {
        <div class=wrapper_class>
            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>{header}</TableRow>
                    </TableHeader>
                    <TableBody>{body}</TableBody>
                </Table>
            </div>

            {pagination.map(|options| view! {
                <Show when=move || { options.total.get() > 0 }>
                    <PaginationControls options=options />
                </Show>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Row {
        id: String,
        name: String,
    }

    impl TableRecord for Row {
        fn id(&self) -> &str {
            &self.id
        }

        fn field(&self, name: &str) -> Option<String> {
            match name {
                "name" => Some(self.name.clone()),
                _ => None,
            }
        }
    }

    fn row(id: &str, name: &str) -> Row {
        Row {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_loading_wins_over_rows() {
        assert_eq!(BodyState::resolve(true, 3), BodyState::Loading);
        assert_eq!(BodyState::resolve(true, 0), BodyState::Loading);
    }

    #[test]
    fn test_empty_and_populated() {
        assert_eq!(BodyState::resolve(false, 0), BodyState::Empty);
        assert_eq!(BodyState::resolve(false, 1), BodyState::Rows);
    }

    #[test]
    fn test_cell_value_uses_data_index() {
        let named = ColumnDef::<Row>::new("name", "Name").data_index("name");
        let unknown = ColumnDef::<Row>::new("x", "X").data_index("missing");
        let whole_row = ColumnDef::<Row>::new("actions", "Actions");

        let r = row("1", "Toyota");
        assert_eq!(named.cell_value(&r).as_deref(), Some("Toyota"));
        assert_eq!(unknown.cell_value(&r), None);
        assert_eq!(whole_row.cell_value(&r), None);
    }

    #[test]
    fn test_header_style_from_width() {
        let col = ColumnDef::<Row>::new("name", "Name").width(240);
        assert_eq!(col.header_style(), "width: 240px;");
        assert_eq!(ColumnDef::<Row>::new("a", "A").header_style(), "");
    }

    #[test]
    fn test_row_class_resolution() {
        let r = row("1", "a");
        let fixed = RowClass::<Row>::Static("row".into());
        assert_eq!(fixed.resolve(&r, 3), "row");

        let striped = RowClass::<Row>::striped();
        assert_eq!(striped.resolve(&r, 0), "");
        assert_eq!(striped.resolve(&r, 1), "table__row--striped");
    }
}

//! UI Components
//!
//! Reusable Leptos components.

mod entity_table;
mod record_form;
mod pagination_bar;
mod view_tab_bar;
mod notice_list;
mod delete_confirm_button;

pub use entity_table::EntityTable;
pub use record_form::RecordForm;
pub use pagination_bar::PaginationBar;
pub use view_tab_bar::ViewTabBar;
pub use notice_list::NoticeList;
pub use delete_confirm_button::DeleteConfirmButton;

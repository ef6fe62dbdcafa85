pub mod faq_item;
pub mod lead_form;
pub mod page;

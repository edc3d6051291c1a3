pub mod business_process;
pub mod customer_insights;
pub mod datasource;
pub mod integration;
pub mod marketing;
pub mod report;
pub mod risk;
pub mod sales;

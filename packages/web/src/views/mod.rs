mod admin_layout;
pub use admin_layout::AdminLayout;

mod dashboard;
pub use dashboard::Dashboard;

mod login;
pub use login::Login;

mod not_found;
pub use not_found::NotFound;

mod resources;
pub use resources::{
    Branches, Cms, Discounts, Ingredients, Loyalty, MenuCategories, MenuItems, Orders, Reviews,
    Riders, Roles, Users,
};

mod settings;
pub use settings::Settings;

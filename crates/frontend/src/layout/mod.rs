pub mod header;
pub mod sidebar;

use leptos::prelude::*;

use crate::domain::customers::ui::CustomerList;
use crate::domain::orders::ui::OrderList;
use crate::domain::purchases::ui::PurchaseList;
use crate::domain::sales::ui::SaleList;
use crate::domain::suppliers::ui::SupplierList;
use crate::domain::supplies::ui::SupplyList;
use crate::domain::supply_categories::ui::SupplyCategoryList;
use crate::system::users::ui::UserList;

use header::Header;
use sidebar::Sidebar;

/// The screens reachable from the sidebar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Suppliers,
    SupplyCategories,
    Supplies,
    Purchases,
    Customers,
    Orders,
    Sales,
    Users,
}

impl Screen {
    pub const ALL: [Screen; 8] = [
        Screen::Suppliers,
        Screen::SupplyCategories,
        Screen::Supplies,
        Screen::Purchases,
        Screen::Customers,
        Screen::Orders,
        Screen::Sales,
        Screen::Users,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Screen::Suppliers => "Suppliers",
            Screen::SupplyCategories => "Supply categories",
            Screen::Supplies => "Supplies",
            Screen::Purchases => "Purchases",
            Screen::Customers => "Customers",
            Screen::Orders => "Orders",
            Screen::Sales => "Sales",
            Screen::Users => "Users",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Screen::Suppliers => "suppliers",
            Screen::SupplyCategories => "tag",
            Screen::Supplies => "inventory",
            Screen::Purchases => "purchases",
            Screen::Customers => "customers",
            Screen::Orders => "orders",
            Screen::Sales => "sales",
            Screen::Users => "users",
        }
    }
}

/// Main application shell: header on top, sidebar on the left, the active
/// screen in the content area.
#[component]
pub fn Shell() -> impl IntoView {
    let active = RwSignal::new(Screen::default());

    view! {
        <div class="app-layout">
            <Header />
            <div class="app-body">
                <Sidebar active=active />
                <main class="app-main">
                    {move || match active.get() {
                        Screen::Suppliers => view! { <SupplierList /> }.into_any(),
                        Screen::SupplyCategories => view! { <SupplyCategoryList /> }.into_any(),
                        Screen::Supplies => view! { <SupplyList /> }.into_any(),
                        Screen::Purchases => view! { <PurchaseList /> }.into_any(),
                        Screen::Customers => view! { <CustomerList /> }.into_any(),
                        Screen::Orders => view! { <OrderList /> }.into_any(),
                        Screen::Sales => view! { <SaleList /> }.into_any(),
                        Screen::Users => view! { <UserList /> }.into_any(),
                    }}
                </main>
            </div>
        </div>
    }
}

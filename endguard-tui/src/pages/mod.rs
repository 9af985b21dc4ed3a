//! Console pages.
//!
//! Every listing page is a thin declaration of columns plus a fetch
//! over the shared [`ListPage`]; the dashboard and the login chrome are
//! their own screens.

mod alerts;
mod computers;
pub mod dashboard;
mod devices;
mod list;
mod login;
mod logs;
mod policies;
mod transfers;
mod users;
mod violations;

pub use dashboard::DashboardPage;
pub use devices::next_access;
pub use list::{ListOutcome, ListPage};
pub use login::{LoginOutcome, LoginPage};

use endguard_lib::error::Error;
use endguard_lib::store::Store;
use tabula::table::Row;
use uuid::Uuid;

use crate::nav::Route;

/// Rows plus, for each row, the id of the record it came from.
pub(crate) type PageData = (Vec<Row>, Vec<Uuid>);

/// The content view for one route.
pub enum PageView {
    Dashboard(DashboardPage),
    List(ListPage),
}

/// Build and load the view for a route.
pub async fn open(route: Route, store: &dyn Store) -> Result<PageView, Error> {
    let mut page = match route {
        Route::Dashboard => return Ok(PageView::Dashboard(dashboard::load(store).await?)),
        Route::Computers => computers::page(),
        Route::Devices => devices::page(),
        Route::Users => users::page(),
        Route::Policies => policies::page(),
        Route::Violations => violations::page(),
        Route::Alerts => alerts::page(),
        Route::Logs => logs::page(),
        Route::Transfers => transfers::page(),
    };
    refresh(route, &mut page, store).await?;
    Ok(PageView::List(page))
}

/// Re-fetch the collection behind an already-open listing page. The
/// page keeps its search text; page position resets with the new data.
pub async fn refresh(route: Route, page: &mut ListPage, store: &dyn Store) -> Result<(), Error> {
    let (rows, ids) = match route {
        Route::Dashboard => return Ok(()),
        Route::Computers => computers::fetch(store).await?,
        Route::Devices => devices::fetch(store).await?,
        Route::Users => users::fetch(store).await?,
        Route::Policies => policies::fetch(store).await?,
        Route::Violations => violations::fetch(store).await?,
        Route::Alerts => alerts::fetch(store).await?,
        Route::Logs => logs::fetch(store).await?,
        Route::Transfers => transfers::fetch(store).await?,
    };
    page.set_data(rows, ids);
    Ok(())
}

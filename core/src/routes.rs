//! The kiosk's route table

use crate::router::{Route, RouteResult, RouteTable};
use crate::views::{BusStationView, CathedralQuarterView, HomeView, ViewRef};

/// Symbolic name of the home route
pub const HOME: &str = "home";
/// Symbolic name of the Cathedral Quarter route
pub const CATHEDRAL_QUARTER: &str = "cathedralQuarter";
/// Symbolic name of the Bus Station route
pub const BUS_STATION: &str = "busStation";

/// Build the route table: `/` home, `/cq` Cathedral Quarter, `/bs` Bus Station
pub fn kiosk_routes() -> RouteResult<RouteTable<ViewRef>> {
    RouteTable::builder()
        .add_route(
            Route::new("/", HOME, ViewRef::of::<HomeView>())
                .with_description("Cycles between the Cathedral Quarter and Bus Station boards"),
        )
        .add_route(
            Route::new("/cq", CATHEDRAL_QUARTER, ViewRef::of::<CathedralQuarterView>())
                .with_description("Departures around the Cathedral Quarter"),
        )
        .add_route(
            Route::new("/bs", BUS_STATION, ViewRef::of::<BusStationView>())
                .with_description("Departures from Derby bus station"),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::Resolution;

    #[test]
    fn test_each_path_resolves_to_its_view() {
        let table = kiosk_routes().expect("Failed to build routes");

        let expected = [
            ("/", ViewRef::of::<HomeView>()),
            ("/cq", ViewRef::of::<CathedralQuarterView>()),
            ("/bs", ViewRef::of::<BusStationView>()),
        ];
        for (path, view) in expected {
            assert_eq!(table.resolve(path).view(), Some(&view), "path {}", path);
        }
    }

    #[test]
    fn test_names_agree_with_paths() {
        let table = kiosk_routes().expect("Failed to build routes");

        assert_eq!(
            table.by_name(HOME).map(|route| &route.view),
            table.resolve("/").view()
        );
        assert_eq!(
            table.by_name(CATHEDRAL_QUARTER).map(|route| &route.view),
            table.resolve("/cq").view()
        );
        assert_eq!(table.by_name(BUS_STATION).map(|route| route.path.as_str()), Some("/bs"));
        assert_eq!(table.home().name.as_str(), HOME);
    }

    #[test]
    fn test_unknown_path_is_not_an_error() {
        let table = kiosk_routes().expect("Failed to build routes");
        assert!(matches!(table.resolve("/unknown"), Resolution::Unresolved { .. }));
    }
}

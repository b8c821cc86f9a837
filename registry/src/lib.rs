use std::sync::Arc;

use adapter::http::HttpClient;
use adapter::repository::booking::BookingRepositoryImpl;
use adapter::repository::price::PriceMasterRepositoryImpl;
use kernel::repository::booking::BookingRepository;
use kernel::repository::price::PriceMasterRepository;
use kernel::usecase::summary::BookingSummaryUseCase;

#[derive(Clone)]
pub struct AppRegistry {
    booking_summary_usecase: Arc<BookingSummaryUseCase>,
}

impl AppRegistry {
    pub fn new(http: HttpClient) -> Self {
        let booking_repository = Arc::new(BookingRepositoryImpl::new(http.clone()));
        let price_master_repository = Arc::new(PriceMasterRepositoryImpl::new(http));
        Self::from_repositories(booking_repository, price_master_repository)
    }

    /// Wires arbitrary repository implementations, e.g. in-memory fakes.
    pub fn from_repositories(
        booking_repository: Arc<dyn BookingRepository>,
        price_master_repository: Arc<dyn PriceMasterRepository>,
    ) -> Self {
        let booking_summary_usecase = Arc::new(BookingSummaryUseCase::new(
            booking_repository,
            price_master_repository,
        ));
        Self {
            booking_summary_usecase,
        }
    }

    pub fn booking_summary_usecase(&self) -> Arc<BookingSummaryUseCase> {
        self.booking_summary_usecase.clone()
    }
}

//! Location API operations

use log::debug;
use serde_json::{json, Value};

use crate::config::api;
use crate::error::{Result, ZiaError};
use crate::zia::session::{ApiRequest, ZiaSession};
use crate::zia::{require_id, Endpoint};

use super::models::{Location, LocationFilter, LocationLite, LocationLiteFilter, SublocationFilter};

impl ZiaSession {
    /// Get locations, optionally walking every page
    pub async fn get_locations(
        &self,
        filter: &LocationFilter,
        full: bool,
    ) -> Result<Vec<Location>> {
        let request = ApiRequest::get(self.url(&Endpoint::Locations)).query(filter.query_pairs());
        let page_size = filter.page_size.unwrap_or(api::LOCATION_PAGE_SIZE);

        match self.retrieve(&request, page_size, full).await? {
            Some(payload) => payload.decode(),
            None => Ok(Vec::new()),
        }
    }

    /// Get a location by ID, returning both the typed model and the raw JSON
    pub async fn get_location(&self, id: i64) -> Result<Option<(Location, Value)>> {
        let request = ApiRequest::get(self.url(&Endpoint::Location(id)));
        match self.send(&request).await? {
            Some(payload) => {
                let raw = payload.into_json()?;
                let location = serde_json::from_value(raw.clone())?;
                Ok(Some((location, raw)))
            }
            None => Ok(None),
        }
    }

    /// Get the id/name location listing
    pub async fn get_locations_lite(
        &self,
        filter: &LocationLiteFilter,
        full: bool,
    ) -> Result<Vec<LocationLite>> {
        let request =
            ApiRequest::get(self.url(&Endpoint::LocationsLite)).query(filter.query_pairs());
        let page_size = filter.page_size.unwrap_or(api::LOCATION_PAGE_SIZE);

        match self.retrieve(&request, page_size, full).await? {
            Some(payload) => payload.decode(),
            None => Ok(Vec::new()),
        }
    }

    /// Get the sublocations of a location
    pub async fn get_sublocations(
        &self,
        parent_id: i64,
        filter: &SublocationFilter,
    ) -> Result<Vec<Location>> {
        let request =
            ApiRequest::get(self.url(&Endpoint::Sublocations(parent_id))).query(filter.query_pairs());
        match self.send(&request).await? {
            Some(payload) => payload.decode(),
            None => Ok(Vec::new()),
        }
    }

    /// Create a location from a JSON payload
    pub async fn create_location(&self, payload: Value) -> Result<Option<Value>> {
        let request = ApiRequest::post(self.url(&Endpoint::Locations)).body(payload);
        match self.send(&request).await? {
            Some(payload) => Ok(Some(payload.into_json()?)),
            None => Ok(None),
        }
    }

    /// Update a location; the payload must carry its `id`
    pub async fn update_location(&self, payload: Value) -> Result<Option<Value>> {
        let id = require_id(&payload, "location update")?;
        debug!("Updating location {}", id);

        let request = ApiRequest::put(self.url(&Endpoint::Location(id))).body(payload);
        match self.send(&request).await? {
            Some(payload) => Ok(Some(payload.into_json()?)),
            None => Ok(None),
        }
    }

    /// Delete a location by ID
    pub async fn delete_location(&self, id: i64) -> Result<Option<Value>> {
        let request = ApiRequest::delete(self.url(&Endpoint::Location(id)));
        match self.send(&request).await? {
            Some(payload) => Ok(Some(payload.into_json()?)),
            None => Ok(None),
        }
    }

    /// Delete up to 100 locations in one request
    pub async fn bulk_delete_locations(&self, ids: &[i64]) -> Result<Option<Value>> {
        if ids.is_empty() {
            return Err(ZiaError::Validation(
                "Bulk location delete requires at least one ID".to_string(),
            ));
        }
        if ids.len() > api::MAX_BULK_DELETE_LOCATIONS {
            return Err(ZiaError::Validation(format!(
                "Bulk location delete accepts at most {} IDs per request, got {}",
                api::MAX_BULK_DELETE_LOCATIONS,
                ids.len()
            )));
        }

        let request = ApiRequest::post(self.url(&Endpoint::LocationsBulkDelete))
            .body(json!({ "ids": ids }));
        match self.send(&request).await? {
            Some(payload) => Ok(Some(payload.into_json()?)),
            None => Ok(None),
        }
    }
}

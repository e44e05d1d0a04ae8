#[cfg(test)]
mod tests {
    use crate::schemas::ApiDoc;
    use utoipa::openapi::{schema::Schema, PathItemType, RefOr};
    use utoipa::OpenApi;

    fn object_properties(name: &str) -> Vec<String> {
        let openapi = ApiDoc::openapi();
        let components = openapi.components.expect("components should be generated");
        match components.schemas.get(name) {
            Some(RefOr::T(Schema::Object(obj))) => obj.properties.keys().cloned().collect(),
            _ => panic!("{} should be an object schema", name),
        }
    }

    #[test]
    fn test_openapi_schema_generation() {
        let openapi = ApiDoc::openapi();

        assert!(openapi.components.is_some());
        let components = openapi.components.as_ref().unwrap();
        assert!(components.schemas.contains_key("ErrorResponse"));
        assert!(components.schemas.contains_key("HealthResponse"));
        assert!(components.schemas.contains_key("ForecastView"));
        assert!(components.schemas.contains_key("DisplayState"));

        assert!(serde_json::to_string(&openapi).is_ok());
    }

    #[test]
    fn test_error_response_schema_structure() {
        let properties = object_properties("ErrorResponse");
        for field in ["error", "code", "success"] {
            assert!(properties.iter().any(|p| p == field), "missing {}", field);
        }
    }

    #[test]
    fn test_health_response_schema_structure() {
        let properties = object_properties("HealthResponse");
        for field in ["status", "version", "prediction_service"] {
            assert!(properties.iter().any(|p| p == field), "missing {}", field);
        }
    }

    #[test]
    fn test_display_state_uses_camel_case() {
        let properties = object_properties("DisplayState");
        for field in ["actualSeries", "forecastSeries", "labels", "markerIndex", "markerLabel"] {
            assert!(properties.iter().any(|p| p == field), "missing {}", field);
        }
    }

    #[test]
    fn test_forecast_paths_are_documented() {
        let openapi = ApiDoc::openapi();
        let paths = &openapi.paths.paths;

        let health = paths.get("/health").expect("/health should be documented");
        assert!(health.operations.contains_key(&PathItemType::Get));

        let forecast = paths.get("/api/v1/forecast").expect("/api/v1/forecast should be documented");
        assert!(forecast.operations.contains_key(&PathItemType::Get));

        let generate = paths
            .get("/api/v1/forecast/generate")
            .expect("/api/v1/forecast/generate should be documented");
        let post = generate.operations.get(&PathItemType::Post).unwrap();
        for status in ["200", "400", "502"] {
            assert!(post.responses.responses.contains_key(status), "missing {}", status);
        }

        let granularity = paths
            .get("/api/v1/forecast/granularity")
            .expect("/api/v1/forecast/granularity should be documented");
        assert!(granularity.operations.contains_key(&PathItemType::Put));
    }

    #[test]
    fn test_all_error_responses_reference_correct_schema() {
        let openapi_json = serde_json::to_string(&ApiDoc::openapi()).unwrap();

        assert!(!openapi_json.contains("crate.schemas.ErrorResponse"));
        assert!(!openapi_json.contains("common.ErrorResponse"));
        assert!(openapi_json.contains("#/components/schemas/ErrorResponse"));
    }
}

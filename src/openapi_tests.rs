#[cfg(test)]
mod tests {
    use crate::schemas::ApiDoc;
    use utoipa::openapi::{PathItemType, RefOr, schema::Schema};
    use utoipa::OpenApi;

    fn object_properties(name: &str) -> Vec<String> {
        let openapi = ApiDoc::openapi();
        let components = openapi.components.expect("components should be generated");
        match components.schemas.get(name) {
            Some(RefOr::T(Schema::Object(obj))) => obj.properties.keys().cloned().collect(),
            other => panic!("{} should be an object schema, got {:?}", name, other.is_some()),
        }
    }

    #[test]
    fn test_openapi_schema_generation() {
        let openapi = ApiDoc::openapi();

        let components = openapi.components.as_ref().unwrap();
        for name in ["ErrorResponse", "HealthResponse", "HotelDto", "RoomDto", "BookDto", "UserDto", "CredentialsRequest"] {
            assert!(components.schemas.contains_key(name), "missing schema {}", name);
        }

        assert!(serde_json::to_string(&openapi).is_ok());
    }

    #[test]
    fn test_error_response_schema_structure() {
        let properties = object_properties("ErrorResponse");
        for field in ["error", "code", "success"] {
            assert!(properties.iter().any(|p| p == field));
        }
    }

    #[test]
    fn test_hotel_schema_embeds_rooms() {
        let properties = object_properties("HotelDto");
        for field in ["id", "hotel_name", "hotel_address", "hotel_type", "rooms"] {
            assert!(properties.iter().any(|p| p == field));
        }
    }

    #[test]
    fn test_documented_paths() {
        let openapi = ApiDoc::openapi();
        let paths = &openapi.paths.paths;

        let expected = [
            ("/health", PathItemType::Get),
            ("/api/v1/hotels", PathItemType::Get),
            ("/api/v1/hotels", PathItemType::Post),
            ("/api/v1/hotels/{hotel_id}", PathItemType::Put),
            ("/api/v1/hotels/{hotel_id}", PathItemType::Delete),
            ("/api/v1/hotels/{hotel_id}/rooms", PathItemType::Get),
            ("/api/v1/rooms/hotel/{hotel_id}", PathItemType::Post),
            ("/api/v1/rooms/{room_id}", PathItemType::Put),
            ("/api/v1/books/{book_id}", PathItemType::Delete),
            ("/api/v1/auth/register", PathItemType::Post),
            ("/api/v1/auth/login", PathItemType::Post),
            ("/api/v1/users/{username}/roles", PathItemType::Post),
        ];
        for (path, method) in expected {
            let item = paths.get(path).unwrap_or_else(|| panic!("missing path {}", path));
            assert!(item.operations.contains_key(&method), "missing operation on {}", path);
        }
    }

    #[test]
    fn test_delete_responses_are_no_content() {
        let openapi = ApiDoc::openapi();
        let delete = openapi
            .paths
            .paths
            .get("/api/v1/hotels/{hotel_id}")
            .and_then(|item| item.operations.get(&PathItemType::Delete))
            .unwrap();

        assert!(delete.responses.responses.contains_key("204"));
        assert!(delete.responses.responses.contains_key("404"));
    }

    #[test]
    fn test_error_responses_reference_schema_by_name() {
        let openapi_json = serde_json::to_string(&ApiDoc::openapi()).unwrap();

        assert!(!openapi_json.contains("crate.schemas.ErrorResponse"));
        assert!(!openapi_json.contains("crate::schemas::ErrorResponse"));
        assert!(openapi_json.contains("#/components/schemas/ErrorResponse"));
    }
}

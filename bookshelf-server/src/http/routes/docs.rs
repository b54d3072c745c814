//! API description endpoint
//!
//! Serves a hand-maintained OpenAPI 3 document for the book routes.

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

fn book_schema() -> Value {
    json!({
        "type": "object",
        "required": ["id", "title"],
        "properties": {
            "id": { "type": "integer", "format": "int64" },
            "title": { "type": "string" },
            "description": { "type": "string" }
        }
    })
}

fn error_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "error": { "type": "string" },
            "message": { "type": "string" }
        }
    })
}

fn id_param() -> Value {
    json!({
        "name": "id",
        "in": "path",
        "required": true,
        "schema": { "type": "integer", "format": "int64" }
    })
}

fn text(description: &str) -> Value {
    json!({
        "description": description,
        "content": { "text/plain": { "schema": { "type": "string" } } }
    })
}

fn error(description: &str) -> Value {
    json!({
        "description": description,
        "content": {
            "application/json": { "schema": { "$ref": "#/components/schemas/Error" } }
        }
    })
}

/// Build the OpenAPI document for the book API.
pub fn openapi() -> Value {
    let book_ref = json!({ "$ref": "#/components/schemas/Book" });
    let book_body = json!({
        "required": true,
        "content": { "application/json": { "schema": book_ref } }
    });

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Book API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "CRUD service for the books table"
        },
        "paths": {
            "/book/{id}": {
                "get": {
                    "summary": "Get a book by id",
                    "parameters": [id_param()],
                    "responses": {
                        "200": {
                            "description": "The book",
                            "content": { "application/json": { "schema": book_ref } }
                        },
                        "400": error("Invalid id"),
                        "404": error("Book not found")
                    }
                }
            },
            "/books": {
                "get": {
                    "summary": "List all books",
                    "responses": {
                        "200": {
                            "description": "Every book",
                            "content": {
                                "application/json": {
                                    "schema": { "type": "array", "items": book_ref }
                                }
                            }
                        },
                        "500": error("Failed to get books")
                    }
                }
            },
            "/create": {
                "post": {
                    "summary": "Add a book; the id is assigned by the server",
                    "requestBody": book_body,
                    "responses": {
                        "201": text("Book created"),
                        "400": error("Invalid JSON"),
                        "500": error("Failed to add book")
                    }
                }
            },
            "/update": {
                "put": {
                    "summary": "Replace title and description of a book",
                    "requestBody": book_body,
                    "responses": {
                        "200": text("Book updated"),
                        "400": error("Invalid JSON"),
                        "500": error("Failed to update book")
                    }
                }
            },
            "/delete/{id}": {
                "delete": {
                    "summary": "Delete a book by id",
                    "parameters": [id_param()],
                    "responses": {
                        "200": text("Book deleted"),
                        "400": error("Invalid id"),
                        "500": error("Failed to delete book")
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "Book": book_schema(),
                "Error": error_schema()
            }
        }
    })
}

/// GET /openapi.json
async fn openapi_json() -> Json<Value> {
    Json(openapi())
}

/// Documentation routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/openapi.json", get(openapi_json))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_book_route() {
        let doc = openapi();
        let paths = doc["paths"].as_object().unwrap();

        for (path, method) in [
            ("/book/{id}", "get"),
            ("/books", "get"),
            ("/create", "post"),
            ("/update", "put"),
            ("/delete/{id}", "delete"),
        ] {
            assert!(paths[path].get(method).is_some(), "{} {}", method, path);
        }
    }
}

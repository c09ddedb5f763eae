//! Response payload builders shared by the intent handlers.
//!
//! Fulfillment payloads are what the conversational platform renders back to
//! the end user; every handler reply goes through one of these builders.

use serde_json::{Value, json};

// ============================================================================
// Response Builders
// ============================================================================

/// Create a plain fulfillment payload carrying only `fulfillmentText`.
#[must_use]
pub fn create_fulfillment_payload(text: &str) -> Value {
    json!({ "fulfillmentText": text })
}

/// Create the rich thank-you payload for the ending intent.
///
/// Alongside the plain text, the payload carries a Google rich response that
/// speaks the reply and plays a short audio clip. The clip URL comes from
/// configuration rather than being baked in.
#[must_use]
pub fn create_ending_payload(audio_url: &str) -> Value {
    json!({
        "fulfillmentText": "You're welcome!",
        "fulfillmentMessages": [
            { "text": { "text": ["You're welcome!"] } },
            {
                "payload": {
                    "google": {
                        "expectUserResponse": false,
                        "richResponse": {
                            "items": [
                                {
                                    "simpleResponse": {
                                        "textToSpeech": "You're welcome!"
                                    }
                                },
                                {
                                    "mediaResponse": {
                                        "mediaType": "AUDIO",
                                        "mediaObjects": [
                                            {
                                                "name": "Audio Response",
                                                "contentUrl": audio_url,
                                                "description": "Thank you music"
                                            }
                                        ]
                                    }
                                }
                            ]
                        }
                    }
                }
            }
        ]
    })
}

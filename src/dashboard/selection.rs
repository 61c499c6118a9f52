// ---------------------------------------------------------------------------
// Map click payload
// ---------------------------------------------------------------------------

/// One clicked point on the map.  Fields are optional because a payload
/// may arrive partially filled.
#[derive(Debug, Clone, PartialEq)]
pub struct ClickPoint {
    /// Region identifier (a `US_State` code).
    pub location: Option<String>,
    /// Value the region was coloured by.
    pub z: Option<f64>,
}

/// What the map reports when a region is clicked.
#[derive(Debug, Clone, PartialEq)]
pub struct ClickData {
    pub points: Option<Vec<ClickPoint>>,
}

impl ClickData {
    /// Payload for a click on the region `state` coloured by `z`.
    pub fn region(state: &str, z: f64) -> Self {
        Self {
            points: Some(vec![ClickPoint {
                location: Some(state.to_string()),
                z: Some(z),
            }]),
        }
    }

    /// The clicked region's code, if the payload has the expected shape.
    pub fn location(&self) -> Option<&str> {
        self.points.as_deref()?.first()?.location.as_deref()
    }
}

/// State code selected by a click, or `None` when there is no usable
/// selection (no click yet, missing `points`, empty `points`, or a point
/// without a location).
pub fn selected_state(click: Option<&ClickData>) -> Option<&str> {
    click.and_then(ClickData::location)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_click_yields_state() {
        let click = ClickData::region("CA", 17.0);
        assert_eq!(selected_state(Some(&click)), Some("CA"));
    }

    #[test]
    fn first_point_wins() {
        let click = ClickData {
            points: Some(vec![
                ClickPoint { location: Some("NY".into()), z: None },
                ClickPoint { location: Some("TX".into()), z: None },
            ]),
        };
        assert_eq!(selected_state(Some(&click)), Some("NY"));
    }

    #[test]
    fn absent_or_malformed_payloads_yield_nothing() {
        assert_eq!(selected_state(None), None);
        assert_eq!(selected_state(Some(&ClickData { points: None })), None);
        assert_eq!(selected_state(Some(&ClickData { points: Some(vec![]) })), None);
        let no_location = ClickData {
            points: Some(vec![ClickPoint { location: None, z: Some(3.0) }]),
        };
        assert_eq!(selected_state(Some(&no_location)), None);
    }
}

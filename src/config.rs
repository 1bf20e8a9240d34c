// HubSpot lead-capture embed. The form mounts inside the demo modal,
// in the element matched by HUBSPOT_TARGET.
pub const HUBSPOT_PORTAL_ID: &str = "21935835";
pub const HUBSPOT_FORM_ID: &str = "cbf5b5f5-28e3-430f-bfce-b293fed0d9ab";
pub const HUBSPOT_REGION: &str = "na1";
pub const HUBSPOT_TARGET: &str = "#hubspot-form-target";

mod cors;
mod request_id;

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
/// Response validation and envelope decoding
pub mod http;
/// Error bodies returned by the API
pub mod responses;

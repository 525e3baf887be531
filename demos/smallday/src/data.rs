//! Inline scenario data: one small delivery day.
//!
//! Six locations (hub + five stops) and fourteen packages covering every
//! constraint kind: a co-delivery group, a pinned pair, delayed cargo, and
//! the wrong-address package whose correction lands mid-morning.

/// Lower-triangular distance table; row 0 is the hub.
pub const DISTANCE_CSV: &str = "\
Hub,4001 S 700 E,Salt Lake City,UT,84107,0
Oakland,195 W Oakland Ave,Salt Lake City,UT,84115,3.5,0
State,410 S State St,Salt Lake City,UT,84111,6.4,4.1,0
Canyon,233 Canyon Rd,Salt Lake City,UT,84103,2.0,5.0,7.5,0
Peaks,1330 2100 S,Salt Lake City,UT,84106,4.3,6.0,8.2,3.1,0
Temple,300 State St,Salt Lake City,UT,84103,7.6,4.7,2.8,6.5,9.0,0
";

pub const PACKAGE_CSV: &str = "\
id,street,city,state,zip,deadline,weight_kg,instructions
1,195 W Oakland Ave,Salt Lake City,UT,84115,10:30 AM,9.5,
2,1330 2100 S,Salt Lake City,UT,84106,EOD,20.0,
3,233 Canyon Rd,Salt Lake City,UT,84103,EOD,1.0,Must be on vehicle 2
4,300 State St,Salt Lake City,UT,84103,EOD,2.3,
5,410 S State St,Salt Lake City,UT,84111,EOD,11.0,
6,233 Canyon Rd,Salt Lake City,UT,84103,10:30 AM,44.0,Delayed on flight until 9:05 AM
7,300 State St,Salt Lake City,UT,84103,EOD,3.2,
8,195 W Oakland Ave,Salt Lake City,UT,84115,EOD,6.0,Must ship with 13, 15
9,300 Wrong St,Salt Lake City,UT,84101,EOD,1.8,Wrong address listed
10,1330 2100 S,Salt Lake City,UT,84106,EOD,5.5,
11,233 Canyon Rd,Salt Lake City,UT,84103,EOD,0.6,
12,300 State St,Salt Lake City,UT,84103,10:30 AM,7.1,Must be on vehicle 2
13,195 W Oakland Ave,Salt Lake City,UT,84115,EOD,2.0,
15,1330 2100 S,Salt Lake City,UT,84106,9:30 AM,4.4,
";

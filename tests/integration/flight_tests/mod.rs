mod vehicle;
